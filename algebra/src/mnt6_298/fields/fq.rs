fp_config!(
    /// The base field of MNT6-298.
    FqConfig,
    Fq,
    "475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137"
);
