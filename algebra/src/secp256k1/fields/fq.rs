fp_config!(
    /// The base field of secp256k1.
    FqConfig,
    Fq,
    "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
);
