#[cfg(test)]
mod tests {
    extern crate rand;
    use rand::Rng;
    use channel_kinetics::{
        channels::{
            ChannelAttributes, ChannelKinetics, v_to_bio,
            a_type_k::{Ak, AkParams, AksParams},
            gaba_b::{GabaB, GabaBInput, GabaBParams, GabaBState},
            kir::KirParams,
            kna::{KnaMedSlowParams, KnaParams},
            mahp::MahpParams,
            nmda::{Nmda, NmdaParams},
            sahp::SahpParams,
            skca::SkcaParams,
            vgcc::VgccParams,
        },
        math::{ExactKernels, FastKernels},
    };


    #[test]
    pub fn test_build_is_idempotent() {
        assert_eq!(AkParams::default().build(), AkParams::default().build());
        assert_eq!(AksParams::default().build(), AksParams::default().build());
        assert_eq!(GabaBParams::default().build(), GabaBParams::default().build());
        assert_eq!(KirParams::default().build(), KirParams::default().build());
        assert_eq!(KnaParams::default().build(), KnaParams::default().build());
        assert_eq!(KnaMedSlowParams::default().build(), KnaMedSlowParams::default().build());
        assert_eq!(MahpParams::default().build(), MahpParams::default().build());
        assert_eq!(NmdaParams::default().build(), NmdaParams::default().build());
        assert_eq!(SahpParams::default().build(), SahpParams::default().build());
        assert_eq!(SkcaParams::default().build(), SkcaParams::default().build());
        assert_eq!(VgccParams::default().build(), VgccParams::default().build());
    }

    #[test]
    pub fn test_constructors_agree() {
        let params = NmdaParams { tau: 200., ..NmdaParams::default() };

        let built = params.build();
        assert_eq!(Nmda::new(params), built);
        assert_eq!(Nmda::<FastKernels>::from(params), built);
        assert_eq!(built.params(), &params);

        assert_eq!(Ak::default(), AkParams::default().build());
        assert_eq!(GabaB::<ExactKernels>::default(), GabaBParams::default().build_with::<ExactKernels>());
    }

    #[test]
    pub fn test_derived_constants_follow_params() {
        let mut params = NmdaParams::default();
        let before = params.build();

        assert!(params.set_attribute("tau", 50.));
        assert!(params.set_attribute("mg_c", 1.));
        assert!(!params.set_attribute("dt", 1.));

        let after = params.build();
        assert_ne!(before, after);
        assert_eq!(after.dt(), 1. / 50.);
        assert_eq!(after.mg_fact(), 1. / 3.57);
        assert_eq!(before.dt(), 1. / 100.);
    }

    #[test]
    pub fn test_attribute_names() {
        let names = GabaBParams::attribute_names();

        for name in ["gbar", "rise_tau", "decay_tau", "gbase", "gi_spike"] {
            assert!(names.contains(name), "missing: {}", name);
        }
        assert_eq!(names.len(), 5);

        let mut kna = KnaMedSlowParams::default();
        assert_eq!(kna.get_attribute("trial_slow"), Some(0.));
        assert!(kna.set_attribute("trial_slow", 1.));
        assert!(kna.trial_slow);
        assert_eq!(kna.get_attribute("med"), None);

        // enum fields are not exposed
        assert!(!SkcaParams::attribute_names().contains("asymptote"));
    }

    #[test]
    pub fn test_fast_and_exact_kernels_agree() {
        let mut rng = rand::thread_rng();

        let ak_fast = AkParams::default().build();
        let ak_exact = AkParams::default().build_with::<ExactKernels>();
        let kir_fast = KirParams::default().build();
        let kir_exact = KirParams::default().build_with::<ExactKernels>();
        let mahp_fast = MahpParams::default().build();
        let mahp_exact = MahpParams::default().build_with::<ExactKernels>();
        let vgcc_fast = VgccParams::default().build();
        let vgcc_exact = VgccParams::default().build_with::<ExactKernels>();

        for _ in 0..1000 {
            let vm: f32 = rng.gen_range(0.0..1.0);
            let vbio = v_to_bio(vm);

            let k = ak_exact.k_from_v(vbio);
            assert!(
                (ak_fast.m_from_alpha(ak_fast.alpha_from_vk(vbio, k))
                - ak_exact.m_from_alpha(ak_exact.alpha_from_vk(vbio, k))).abs() < 1e-3
            );
            assert!((ak_fast.h_from_v(vbio) - ak_exact.h_from_v(vbio)).abs() < 1e-3);
            assert!((kir_fast.minf(vbio) - kir_exact.minf(vbio)).abs() < 1e-3);
            assert!(
                (mahp_fast.ninf_tau_from_v(vbio).0 - mahp_exact.ninf_tau_from_v(vbio).0).abs() < 1e-3
            );
            assert!((vgcc_fast.m_from_v(vbio) - vgcc_exact.m_from_v(vbio)).abs() < 1e-3);
            assert!((vgcc_fast.h_from_v(vbio) - vgcc_exact.h_from_v(vbio)).abs() < 1e-3);

            let g_fast = vgcc_fast.g_from_v(vm);
            let g_exact = vgcc_exact.g_from_v(vm);
            assert!((g_fast - g_exact).abs() / g_exact < 0.05, "vm: {}", vm);
        }
    }

    #[test]
    pub fn test_gaba_b_peak_time() {
        let gaba_b = GabaBParams::default().build_with::<ExactKernels>();

        let expected = (45. * 50. / 5.) * (50_f32 / 45.).ln();
        assert!((gaba_b.max_time() - expected).abs() < 1e-3);

        // single unit of drive with no further input
        let mut state = GabaBState { g: 0., x: 1. };
        let mut peak = (0, 0.);
        for t in 1..300 {
            let (dg, dx) = gaba_b.bi_exp(state.g, state.x);
            state = GabaBState { g: state.g + dg, x: state.x + dx };

            if state.g > peak.1 {
                peak = (t, state.g);
            }
        }

        assert!((peak.0 as f32 - gaba_b.max_time()).abs() < 3., "peak: {:?}", peak);
        assert!(peak.1 > 0.9 && peak.1 < 1.1, "peak: {:?}", peak);
    }

    #[test]
    pub fn test_gaba_b_drive() {
        let gaba_b = GabaBParams::default().build();

        assert_eq!(gaba_b.g_from_s(2.5), 1.);
        assert!(gaba_b.g_from_s(0.) < 0.01);
        assert!((gaba_b.g_from_s(0.71) - 0.5).abs() < 1e-3);

        // voltage gating is clamped below -90 mV
        assert_eq!(gaba_b.g_from_v(0.), gaba_b.g_from_v(0.1));
        assert_eq!(gaba_b.g_from_v(0.1), 0.);

        let input = GabaBInput { gi: 1., vm: 0.3 };
        let mut state = gaba_b.resting_state();
        for _ in 0..100 {
            state = gaba_b.step(&state, &input);
        }

        assert!(state.g > 0.);
        assert!(gaba_b.conductance(&state, &input) > 0.);
    }
}
