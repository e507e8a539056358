fp_config!(
    /// The scalar field of BLS12-381, of prime order `r`.
    FrConfig,
    Fr,
    "52435875175126190479447740508185965837690552500527637822603658699938581184513"
);
