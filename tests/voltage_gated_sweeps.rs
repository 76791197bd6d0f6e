#[cfg(test)]
mod tests {
    use channel_kinetics::{
        channels::{
            ChannelKinetics, v_from_bio, v_to_bio,
            a_type_k::{AkParams, AksParams},
            gaba_b::GabaBParams,
            kir::KirParams,
            mahp::MahpParams,
            nmda::NmdaParams,
            vgcc::VgccParams,
        },
        math::ExactKernels,
    };


    fn relative_diff(prev: f32, current: f32) -> f32 {
        (prev - current).abs() / prev.abs()
    }

    fn vbio_sweep(step: f32) -> impl Iterator<Item = f32> {
        let n = (100. / step) as usize;

        (0..n).map(move |i| -100. + i as f32 * step)
    }

    #[test]
    pub fn test_vgcc_g_from_v_bounds() {
        let vgcc = VgccParams::default().build();

        let mut prev: Option<f32> = None;
        for i in 0..2000 {
            let v = i as f32 * 0.001;
            let g = vgcc.g_from_v(v);

            assert!(g > 0., "v: {}, g: {}", v, g);
            assert!(g <= 100.1, "v: {}, g: {}", v, g);

            if let Some(prev) = prev {
                assert!(relative_diff(prev, g) <= 0.1, "v: {}, prev: {}, g: {}", v, prev, g);
            }
            prev = Some(g);
        }
    }

    #[test]
    pub fn test_vgcc_g_from_v_non_increasing() {
        let vgcc = VgccParams::default().build_with::<ExactKernels>();

        let mut prev = f32::INFINITY;
        for i in 0..2000 {
            let v = i as f32 * 0.001;
            let g = vgcc.g_from_v(v);

            assert!(g <= prev, "v: {}, prev: {}, g: {}", v, prev, g);
            prev = g;
        }
    }

    #[test]
    pub fn test_vgcc_gates_bounded() {
        let vgcc = VgccParams::default().build();

        for vbio in vbio_sweep(0.01) {
            let m = vgcc.m_from_v(vbio);
            let h = vgcc.h_from_v(vbio);

            assert!((0. ..=1.).contains(&m), "vbio: {}, m: {}", vbio, m);
            assert!((0. ..=1.).contains(&h), "vbio: {}, h: {}", vbio, h);
        }
    }

    #[test]
    pub fn test_vgcc_gates_monotonic() {
        let vgcc = VgccParams::default().build_with::<ExactKernels>();

        let mut prev_m = 0.;
        let mut prev_h = 1.;
        for vbio in vbio_sweep(0.01) {
            let m = vgcc.m_from_v(vbio);
            let h = vgcc.h_from_v(vbio);

            assert!(m >= prev_m, "vbio: {}, prev: {}, m: {}", vbio, prev_m, m);
            assert!(h <= prev_h, "vbio: {}, prev: {}, h: {}", vbio, prev_h, h);

            prev_m = m;
            prev_h = h;
        }
    }

    #[test]
    pub fn test_vgcc_saturation() {
        let vgcc = VgccParams::default().build();

        assert_eq!(vgcc.m_from_v(-61.), 0.);
        assert_eq!(vgcc.m_from_v(-9.), 1.);
        assert_eq!(vgcc.h_from_v(-51.), 1.);
        assert_eq!(vgcc.h_from_v(-9.), 0.);

        // fixed time constants
        let (dm, dh) = vgcc.dmh_from_v(v_from_bio(-5.), 0., 1.);
        assert!((dm - 1. / 3.6).abs() < 1e-6);
        assert!((dh + 1. / 29.).abs() < 1e-6);
    }

    #[test]
    pub fn test_nmda_mg_block_sweep() {
        let nmda = NmdaParams::default().build();

        let mut prev: Option<f32> = None;
        for vbio in vbio_sweep(0.01) {
            let g = nmda.mg_g_from_v(vbio);

            assert!(g > 0., "vbio: {}, g: {}", vbio, g);
            assert!(g <= 8.8, "vbio: {}, g: {}", vbio, g);

            if let Some(prev) = prev {
                assert!(relative_diff(prev, g) <= 0.6, "vbio: {}, prev: {}, g: {}", vbio, prev, g);
            }
            prev = Some(g);
        }

        assert_eq!(nmda.mg_g_from_v(0.), 0.);
        assert_eq!(nmda.mg_g_from_v(30.), 0.);
    }

    #[test]
    pub fn test_nmda_mg_block_peak() {
        let nmda = NmdaParams::default().build_with::<ExactKernels>();

        let mut prev = 0.;
        for vbio in vbio_sweep(0.01) {
            let g = nmda.mg_g_from_v(vbio);

            if vbio < -25.2 {
                assert!(g >= prev, "vbio: {}, prev: {}, g: {}", vbio, prev, g);
            } else if vbio > -24.6 {
                assert!(g <= prev, "vbio: {}, prev: {}, g: {}", vbio, prev, g);
            }

            prev = g;
        }
    }

    #[test]
    pub fn test_aks_plateau() {
        let aks = AksParams::default().build();
        let vmax = aks.params().vmax;

        let at_max = aks.m_from_v(vmax);
        for vbio in [-36., -20., 0., 25.] {
            assert_eq!(aks.m_from_v(vbio), at_max);
        }

        assert!(aks.m_from_v(vmax - 10.) < at_max);
    }

    #[test]
    pub fn test_ak_gates_bounded() {
        for params in [AkParams::distal(), AkParams::proximal()] {
            let ak = params.build();

            let mut state = ak.resting_state();
            for vbio in vbio_sweep(0.5) {
                let vm = v_from_bio(vbio);
                state = ak.step(&state, &vm);

                assert!((0. ..=1.).contains(&state.m), "vbio: {}, m: {}", vbio, state.m);
                assert!((0. ..=1.).contains(&state.h), "vbio: {}, h: {}", vbio, state.h);
                assert!(ak.conductance(&state, &vm) >= 0.);
            }
        }
    }

    #[test]
    pub fn test_kir_rest_and_gate() {
        let kir = KirParams { gbar: 1., ..KirParams::default() }.build();

        assert_eq!(kir.resting_state().m, kir.minf(-70.));

        let mut prev = 1.;
        for vbio in vbio_sweep(0.5) {
            let (minf, mtau) = kir.m_rates(vbio);

            assert!((0. ..=1.).contains(&minf));
            assert!(minf <= prev, "vbio: {}, prev: {}, minf: {}", vbio, prev, minf);
            assert!(mtau > 0.);

            prev = minf;
        }

        // conductance is read from the gate before it is advanced
        let state = kir.resting_state();
        let (g, next) = kir.gkir_step(v_from_bio(-20.), &state);
        assert_eq!(g, kir.gkir(state.m));
        assert_eq!(next, kir.step(&state, &v_from_bio(-20.)));
    }

    #[test]
    pub fn test_mahp_gate() {
        let mahp = MahpParams::default().build();

        assert!((mahp.tadj() - 2.3_f32.powf(1.4)).abs() < 1e-4);

        let (ninf, _) = mahp.ninf_tau_from_v(mahp.params().voff);
        assert!((ninf - 0.5).abs() < 1e-6);

        let mut state = mahp.resting_state();
        for vbio in vbio_sweep(0.5) {
            let vm = v_from_bio(vbio);
            state = mahp.step(&state, &vm);

            assert!((0. ..=1.).contains(&state.n), "vbio: {}, n: {}", vbio, state.n);
        }

        let (g, next) = mahp.gmahp_step(0.5, &state);
        assert_eq!(g, mahp.conductance(&next, &0.5));
    }

    #[test]
    pub fn test_vgcc_g_from_v_branch_boundary() {
        let vgcc = VgccParams::default().build_with::<ExactKernels>();

        let taylor = |vbio: f32| 1.0 / (0.0756 * (1.0 + 0.0378 * vbio));
        let general = |vbio: f32| -vbio / (1.0 - (0.0756 * vbio).exp());

        for outside in [0.1001, -0.1001] {
            let vm = v_from_bio(outside);
            let vbio = v_to_bio(vm);

            assert!(vbio.abs() >= 0.1, "vbio: {}", vbio);
            assert_eq!(vgcc.g_from_v(vm), general(vbio));
        }

        for inside in [0.0999, -0.0999] {
            let vm = v_from_bio(inside);
            let vbio = v_to_bio(vm);

            assert!(vbio.abs() < 0.1, "vbio: {}", vbio);
            assert_eq!(vgcc.g_from_v(vm), taylor(vbio));
        }
    }

    #[test]
    pub fn test_nmda_ca_from_v_branch_boundary() {
        let nmda = NmdaParams::default().build_with::<ExactKernels>();

        let taylor = |av: f32| 1.0 / (0.0756 * (1. + 0.0378 * av));
        let general = |av: f32| -av / (1.0 - (0.0756 * av).exp());

        for av in [0.5, -0.5] {
            assert_eq!(nmda.ca_from_v(av), general(av));
            assert!((general(av) - taylor(av)).abs() > 1e-3);
        }

        for av in [0.4999, -0.4999] {
            assert_eq!(nmda.ca_from_v(av), taylor(av));
            assert!((general(av) - taylor(av)).abs() > 1e-3);
        }
    }

    #[test]
    pub fn test_stepped_gates_bounded() {
        let kir = KirParams { gbar: 1., ..KirParams::default() }.build();
        let vgcc = VgccParams::default().build();

        let mut kir_state = kir.resting_state();
        let mut vgcc_state = vgcc.resting_state();

        // depolarizing then hyperpolarizing
        let up: Vec<f32> = vbio_sweep(0.5).collect();
        let down: Vec<f32> = up.iter().rev().cloned().collect();

        for vbio in up.into_iter().chain(down) {
            let vm = v_from_bio(vbio);

            kir_state = kir.step(&kir_state, &vm);
            vgcc_state = vgcc.step(&vgcc_state, &vm);

            assert!((0. ..=1.).contains(&kir_state.m), "vbio: {}, m: {}", vbio, kir_state.m);
            assert!((0. ..=1.).contains(&vgcc_state.m), "vbio: {}, m: {}", vbio, vgcc_state.m);
            assert!((0. ..=1.).contains(&vgcc_state.h), "vbio: {}, h: {}", vbio, vgcc_state.h);

            let g = vgcc.conductance(&vgcc_state, &vm);
            assert!(g >= 0. && g.is_finite(), "vbio: {}, g: {}", vbio, g);
        }
    }

    #[test]
    pub fn test_conductance_sweeps() {
        let gaba_b = GabaBParams::default().build();
        let kir = KirParams { gbar: 1., ..KirParams::default() }.build();
        let aks = AksParams::default().build();
        let mahp = MahpParams::default().build();

        let gaba_b_max = gaba_b.params().gbar * 2. * (1. + gaba_b.params().gbase);
        let aks_max = aks.params().gbar * aks.params().hf;
        let mahp_max = mahp.tadj() * mahp.params().gbar;

        let mut kir_state = kir.resting_state();
        let mut mahp_state = mahp.resting_state();

        for vbio in vbio_sweep(0.5) {
            let vm = v_from_bio(vbio);

            let gv = gaba_b.g_from_v(vm);
            assert!((0. ..=2.).contains(&gv), "vbio: {}, g_from_v: {}", vbio, gv);
            for g in [0., 0.5, 1.] {
                let total = gaba_b.ggaba_b(g, vm);
                assert!(total >= 0. && total <= gaba_b_max, "vbio: {}, ggaba_b: {}", vbio, total);
            }

            kir_state = kir.step(&kir_state, &vm);
            let gkir = kir.gkir(kir_state.m);
            assert!(gkir >= 0. && gkir <= kir.params().gbar, "vbio: {}, gkir: {}", vbio, gkir);

            let gak = aks.gak(vm);
            assert!(gak >= 0. && gak <= aks_max, "vbio: {}, gak: {}", vbio, gak);

            mahp_state = mahp.step(&mahp_state, &vm);
            let gmahp = mahp.gmahp(mahp_state.n);
            assert!(gmahp >= 0. && gmahp <= mahp_max, "vbio: {}, gmahp: {}", vbio, gmahp);
        }
    }
}
