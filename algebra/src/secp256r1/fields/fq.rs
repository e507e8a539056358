fp_config!(
    /// The base field of secp256r1.
    FqConfig,
    Fq,
    "0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
);
