//! GABA-B / GIRK channel with bi-exponential rise and decay driven by inhibitory input,
//! using the Brunel & Wang (2001) parameters.

use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crate::math::{FastKernels, Kernels};
use super::{impl_channel_build, v_to_bio, ChannelAttributes, ChannelKinetics};


/// Parameters of the GABA-B channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct GabaBParams {
    /// Overall strength of the current, `0.015` works for small networks
    /// while larger networks may prefer lower values (`0.012`)
    pub gbar: f32,
    /// Rise time constant (ms)
    pub rise_tau: f32,
    /// Decay time constant (ms)
    pub decay_tau: f32,
    /// Baseline open fraction added to the spiking driven conductance
    pub gbase: f32,
    /// Multiplier converting inhibitory conductance to equivalent GABA spikes
    pub gi_spike: f32,
}

impl Default for GabaBParams {
    fn default() -> Self {
        GabaBParams {
            gbar: 0.015,
            rise_tau: 45.,
            decay_tau: 50.,
            gbase: 0.2,
            gi_spike: 10.,
        }
    }
}

/// Bi-exponential state of [`GabaB`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GabaBState {
    /// Channel activation
    pub g: f32,
    /// Underlying driving value
    pub x: f32,
}

/// Input for one cycle of [`GabaB`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GabaBInput {
    /// Inhibitory conductance, a proxy for GABA spiking
    pub gi: f32,
    /// Normalized membrane potential
    pub vm: f32,
}

/// Compiled GABA-B channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GabaB<M: Kernels = FastKernels> {
    params: GabaBParams,
    /// `(decay / rise) ^ (rise / (decay - rise))`
    tau_fact: f32,
    /// Time of peak conductance (ms)
    max_time: f32,
    rise_dt: f32,
    decay_dt: f32,
    _kernels: PhantomData<M>,
}

impl_channel_build!(GabaBParams, GabaB);

impl<M: Kernels> GabaB<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: GabaBParams) -> Self {
        let rise = params.rise_tau;
        let decay = params.decay_tau;

        GabaB {
            tau_fact: M::pow(decay / rise, rise / (decay - rise)),
            max_time: ((rise * decay) / (decay - rise)) * M::log(decay / rise),
            rise_dt: 1. / rise,
            decay_dt: 1. / decay,
            params,
            _kernels: PhantomData,
        }
    }

    /// Factor used to scale `x` when integrating `g`
    pub fn tau_fact(&self) -> f32 {
        self.tau_fact
    }

    /// Time in ms after a single input at which `g` peaks
    pub fn max_time(&self) -> f32 {
        self.max_time
    }

    /// Voltage dependence of the conductance from normalized membrane potential,
    /// potentials below -90 mV are treated as -90 mV
    pub fn g_from_v(&self, vm: f32) -> f32 {
        let vbio = v_to_bio(vm).max(-90.);

        (vbio + 90.0) / (1.0 + M::exp(0.1 * ((vbio + 90.0) + 10.0)))
    }

    /// Conductance drive from the inhibitory conductance, saturates at 1
    pub fn g_from_s(&self, gi: f32) -> f32 {
        let ss = gi * self.params.gi_spike;
        if ss > 20. {
            return 1.;
        }

        1.0 / (1.0 + M::exp(-(ss - 7.1) / 1.4))
    }

    /// Bi-exponential deltas `(dg, dx)` to add to `g` and `x`
    pub fn bi_exp(&self, g: f32, x: f32) -> (f32, f32) {
        let dg = (self.tau_fact * x - g) * self.rise_dt;
        let dx = -x * self.decay_dt;

        (dg, dx)
    }

    /// Updated activation given the inhibitory conductance
    pub fn gaba_b(&self, gi: f32, state: &GabaBState) -> GabaBState {
        let (dg, dx) = self.bi_exp(state.g, state.x);

        GabaBState {
            g: state.g + dg,
            x: state.x + self.g_from_s(gi) + dx,
        }
    }

    /// Net conductance including `gbar`, `gbase`, and voltage gating
    pub fn ggaba_b(&self, g: f32, vm: f32) -> f32 {
        self.params.gbar * self.g_from_v(vm) * (g + self.params.gbase)
    }
}

impl<M: Kernels> ChannelKinetics for GabaB<M> {
    type State = GabaBState;
    type Input = GabaBInput;

    fn resting_state(&self) -> GabaBState {
        GabaBState::default()
    }

    fn step(&self, state: &GabaBState, input: &GabaBInput) -> GabaBState {
        self.gaba_b(input.gi, state)
    }

    fn conductance(&self, state: &GabaBState, input: &GabaBInput) -> f32 {
        self.ggaba_b(state.g, input.vm)
    }
}
