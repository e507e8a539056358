fp_config!(
    /// The scalar field of MNT6-298.
    FrConfig,
    Fr,
    "475922286169261325753349249653048451545124879242694725395555128576210262817955800483758081"
);
