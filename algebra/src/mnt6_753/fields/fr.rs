fp_config!(
    /// The scalar field of MNT6-753.
    FrConfig,
    Fr,
    "41898490967918953402344214791240637128170709919953949071783502921025352812571106773058893763790338921418070971888253786114353726529584385201591605722013126468931404347949840543007986327743462853720628051692141265303114721689601"
);
