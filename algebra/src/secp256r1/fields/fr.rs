fp_config!(
    /// The scalar field of secp256r1, of prime order `n`.
    FrConfig,
    Fr,
    "0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
);
