fp_config!(
    /// The scalar field of BN254, of prime order `r`.
    FrConfig,
    Fr,
    "21888242871839275222246405745257275088548364400416034343698204186575808495617"
);
