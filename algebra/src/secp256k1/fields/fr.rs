fp_config!(
    /// The scalar field of secp256k1, of prime order `n`.
    FrConfig,
    Fr,
    "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
);
