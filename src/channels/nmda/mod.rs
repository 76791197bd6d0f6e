//! NMDA receptor channel with voltage dependent magnesium block, following
//! Jahr & Stevens (1990) and the Sanders et al (2013) magnesium constants.
//!
//! The receiver side integrates raw synaptic input into a decaying binding value
//! ([`Nmda::nmda_syn`]), the sender side tracks a saturating open/inhibited binding
//! state per spike ([`Nmda::snmda_from_spike`]).

use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crate::math::{FastKernels, Kernels};
use super::{impl_channel_build, v_to_bio, ChannelAttributes, ChannelKinetics};


/// Parameters of the NMDA channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct NmdaParams {
    /// Multiplier on the NMDA conductance, `0.006` to `0.007` is typical
    pub gbar: f32,
    /// Decay time constant (ms) of the receptor binding
    pub tau: f32,
    /// Decay time constant of the sender side inhibition, `1` effectively disables it
    pub i_tau: f32,
    /// Extracellular magnesium concentration (mM)
    pub mg_c: f32,
    /// Offset added to membrane potential before the block and calcium functions (mV)
    pub voff: f32,
}

impl Default for NmdaParams {
    fn default() -> Self {
        NmdaParams {
            gbar: 0.006,
            tau: 100.,
            i_tau: 1.,
            mg_c: 1.4,
            voff: 0.,
        }
    }
}

/// Receiver side binding of [`Nmda`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NmdaState {
    /// Integrated synaptic binding
    pub syn: f32,
}

/// Input for one cycle of [`Nmda`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NmdaInput {
    /// Raw synaptic input arriving this cycle
    pub raw: f32,
    /// Normalized membrane potential
    pub vm: f32,
}

/// Sender side binding state, open and inhibited fractions
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnmdaState {
    pub open: f32,
    pub inhib: f32,
}

/// Compiled NMDA channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nmda<M: Kernels = FastKernels> {
    params: NmdaParams,
    dt: f32,
    i_dt: f32,
    /// `mg_c / 3.57`
    mg_fact: f32,
    _kernels: PhantomData<M>,
}

impl_channel_build!(NmdaParams, Nmda);

impl<M: Kernels> Nmda<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: NmdaParams) -> Self {
        Nmda {
            dt: 1. / params.tau,
            i_dt: 1. / params.i_tau,
            mg_fact: params.mg_c / 3.57,
            params,
            _kernels: PhantomData,
        }
    }

    /// Binding decay rate, `1 / tau`
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Inhibition decay rate, `1 / i_tau`
    pub fn i_dt(&self) -> f32 {
        self.i_dt
    }

    /// Magnesium factor, `mg_c / 3.57`
    pub fn mg_fact(&self) -> f32 {
        self.mg_fact
    }

    /// Voltage dependent conductance factor from vbio, including the magnesium
    /// block, 0 at or above the reversal potential
    pub fn mg_g_from_v(&self, vbio: f32) -> f32 {
        let av = vbio + self.params.voff;
        if av >= 0. {
            return 0.;
        }

        -av / (1.0 + self.mg_fact * M::exp(-0.062 * av))
    }

    /// Calcium influx factor from vbio
    pub fn ca_from_v(&self, vbio: f32) -> f32 {
        let av = vbio + self.params.voff;
        // removes the 0 / 0 at 0 mV and the numerical noise around it
        if av > -0.5 && av < 0.5 {
            return 1.0 / (0.0756 * (1. + 0.0378 * av));
        }

        -av / (1.0 - M::exp(0.0756 * av))
    }

    /// Updated binding given the current binding and raw input
    pub fn nmda_syn(&self, nmda: f32, raw: f32) -> f32 {
        nmda + raw - self.dt * nmda
    }

    /// Conductance from binding and normalized membrane potential
    pub fn gnmda(&self, nmda: f32, vm: f32) -> f32 {
        self.params.gbar * self.mg_g_from_v(v_to_bio(vm)) * nmda
    }

    /// Updated sender side binding, a spike opens the channel in proportion to
    /// how uninhibited it is, otherwise both fractions decay
    pub fn snmda_from_spike(&self, spike: bool, state: &SnmdaState) -> SnmdaState {
        if spike {
            let inh = 1. - state.inhib;

            SnmdaState {
                open: state.open + inh * (1. - state.open),
                inhib: state.inhib + inh,
            }
        } else {
            SnmdaState {
                open: state.open - self.dt * state.open,
                inhib: state.inhib - self.i_dt * state.inhib,
            }
        }
    }
}

impl<M: Kernels> ChannelKinetics for Nmda<M> {
    type State = NmdaState;
    type Input = NmdaInput;

    fn resting_state(&self) -> NmdaState {
        NmdaState::default()
    }

    fn step(&self, state: &NmdaState, input: &NmdaInput) -> NmdaState {
        NmdaState { syn: self.nmda_syn(state.syn, input.raw) }
    }

    fn conductance(&self, state: &NmdaState, input: &NmdaInput) -> f32 {
        self.gnmda(state.syn, input.vm)
    }
}
