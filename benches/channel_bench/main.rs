#![feature(test)]
extern crate test;


mod tests {
    use test::Bencher;
    extern crate rand;
    extern crate channel_kinetics;
    use rand::Rng;
    use channel_kinetics::{
        channels::{
            ChannelKinetics,
            a_type_k::AkParams,
            nmda::{NmdaInput, NmdaParams},
            vgcc::VgccParams,
        },
        math::ExactKernels,
        population::{resting_population, step_population},
    };

    fn random_voltages(n: usize) -> Vec<f32> {
        let mut rng = rand::thread_rng();

        (0..n).map(|_| rng.gen_range(0.2..1.0)).collect()
    }

    #[bench]
    fn bench_vgcc_fast(b: &mut Bencher) {
        let vgcc = VgccParams::default().build();
        let voltages = random_voltages(1000);
        let mut state = vgcc.resting_state();

        b.iter(|| {
            for vm in voltages.iter() {
                state = vgcc.step(&state, vm);
                test::black_box(vgcc.conductance(&state, vm));
            }
        })
    }

    #[bench]
    fn bench_vgcc_exact(b: &mut Bencher) {
        let vgcc = VgccParams::default().build_with::<ExactKernels>();
        let voltages = random_voltages(1000);
        let mut state = vgcc.resting_state();

        b.iter(|| {
            for vm in voltages.iter() {
                state = vgcc.step(&state, vm);
                test::black_box(vgcc.conductance(&state, vm));
            }
        })
    }

    #[bench]
    fn bench_ak_fast(b: &mut Bencher) {
        let ak = AkParams::default().build();
        let voltages = random_voltages(1000);
        let mut state = ak.resting_state();

        b.iter(|| {
            for vm in voltages.iter() {
                state = ak.step(&state, vm);
                test::black_box(ak.conductance(&state, vm));
            }
        })
    }

    #[bench]
    fn bench_nmda_reg_10000(b: &mut Bencher) {
        let nmda = NmdaParams::default().build();
        let inputs: Vec<NmdaInput> = random_voltages(10000).into_iter()
            .map(|vm| NmdaInput { raw: 0.01, vm })
            .collect();
        let mut states = resting_population(&nmda, 10000);

        b.iter(|| {
            for (state, input) in states.iter_mut().zip(inputs.iter()) {
                *state = nmda.step(state, input);
            }
        })
    }

    #[bench]
    fn bench_nmda_par_10000(b: &mut Bencher) {
        let nmda = NmdaParams::default().build();
        let inputs: Vec<NmdaInput> = random_voltages(10000).into_iter()
            .map(|vm| NmdaInput { raw: 0.01, vm })
            .collect();
        let mut states = resting_population(&nmda, 10000);

        b.iter(|| {
            step_population(&nmda, &mut states, &inputs).expect("Could not step population");
        })
    }
}
