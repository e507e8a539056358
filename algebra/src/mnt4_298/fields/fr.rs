fp_config!(
    /// The scalar field of MNT4-298.
    FrConfig,
    Fr,
    "475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137"
);
