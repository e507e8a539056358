fp_config!(
    /// The base field of BN254.
    FqConfig,
    Fq,
    "21888242871839275222246405745257275088696311157297823662689037894645226208583"
);
