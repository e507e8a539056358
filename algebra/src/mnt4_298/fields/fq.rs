fp_config!(
    /// The base field of MNT4-298.
    FqConfig,
    Fq,
    "475922286169261325753349249653048451545124879242694725395555128576210262817955800483758081"
);
