//! Sodium gated potassium currents driving adaptation of firing. Spikes let Na in,
//! which opens K channels that pull the membrane potential back toward (or below) rest.
//!
//! Two time scales are supported through [`KnaMedSlow`], Slick (medium) and Slack (slow),
//! see Kaczmarek, L. K. (2013). Slack, Slick, and Sodium-Activated Potassium Channels.

use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crate::math::{FastKernels, Kernels};
use super::{impl_channel_build, ChannelAttributes, ChannelKinetics};


/// Parameters of a single time scale of sodium gated potassium adaptation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct KnaParams {
    /// Whether this component is active, conductance is held at 0 otherwise
    pub on: bool,
    /// Rise rate per spike, `1 / rise` is the rise time constant
    pub rise: f32,
    /// Maximum conductance contribution
    pub max: f32,
    /// Decay time constant (ms)
    pub tau: f32,
}

impl Default for KnaParams {
    fn default() -> Self {
        KnaParams {
            on: true,
            rise: 0.01,
            max: 0.1,
            tau: 100.,
        }
    }
}

/// Adaptation conductance of [`Kna`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KnaState {
    /// Sodium gated potassium conductance
    pub g: f32,
}

/// Compiled single time scale adaptation channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kna<M: Kernels = FastKernels> {
    params: KnaParams,
    dt: f32,
    _kernels: PhantomData<M>,
}

impl_channel_build!(KnaParams, Kna);

impl<M: Kernels> Kna<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: KnaParams) -> Self {
        Kna { dt: 1. / params.tau, params, _kernels: PhantomData }
    }

    /// Decay rate, `1 / tau`
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Updated conductance given whether the neuron spiked this cycle
    pub fn gc_from_spike(&self, g: f32, spike: bool) -> f32 {
        if !self.params.on {
            return 0.;
        }

        if spike {
            g + self.params.rise * (self.params.max - g)
        } else {
            g - self.dt * g
        }
    }

    /// Updated conductance from a rate coded activation, `act` should already
    /// include any rate compensation factor
    pub fn gc_from_rate(&self, g: f32, act: f32) -> f32 {
        if !self.params.on {
            return 0.;
        }

        g + act * self.params.rise * (self.params.max - g) - (self.dt * g)
    }
}

impl<M: Kernels> ChannelKinetics for Kna<M> {
    type State = KnaState;
    type Input = bool;

    fn resting_state(&self) -> KnaState {
        KnaState::default()
    }

    fn step(&self, state: &KnaState, spike: &bool) -> KnaState {
        KnaState { g: self.gc_from_spike(state.g, *spike) }
    }

    fn conductance(&self, state: &KnaState, _: &bool) -> f32 {
        state.g
    }
}

/// Medium (Slick) and slow (Slack) adaptation together
///
/// Fields missing when deserializing fall back to the preset of their own time scale,
/// so a partial `slow` table keeps the slow defaults for everything it leaves out
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(from = "KnaMedSlowRaw")]
pub struct KnaMedSlowParams {
    /// Whether adaptation is applied at all
    pub on: bool,
    /// Replaces the per cycle slow update with a discrete increment at the start
    /// of each trial, see [`KnaMedSlow::trial_slow_increment`]
    pub trial_slow: bool,
    /// Compensation applied to rate coded activation before updating either time scale
    pub rate: f32,
    /// Medium time scale
    pub med: KnaParams,
    /// Slow time scale
    pub slow: KnaParams,
}

impl Default for KnaMedSlowParams {
    fn default() -> Self {
        KnaMedSlowParams {
            on: true,
            trial_slow: false,
            rate: 0.8,
            med: KnaParams { tau: 200., rise: 0.02, max: 0.2, ..KnaParams::default() },
            slow: KnaParams { tau: 1000., rise: 0.001, max: 0.2, ..KnaParams::default() },
        }
    }
}

/// Intermediate deserialization of a single time scale, no defaults applied
#[derive(Default, Deserialize)]
#[serde(default)]
struct KnaRaw {
    on: Option<bool>,
    rise: Option<f32>,
    max: Option<f32>,
    tau: Option<f32>,
}

impl KnaRaw {
    fn or(self, preset: KnaParams) -> KnaParams {
        KnaParams {
            on: self.on.unwrap_or(preset.on),
            rise: self.rise.unwrap_or(preset.rise),
            max: self.max.unwrap_or(preset.max),
            tau: self.tau.unwrap_or(preset.tau),
        }
    }
}

/// Intermediate deserialization of [`KnaMedSlowParams`]
#[derive(Default, Deserialize)]
#[serde(default)]
struct KnaMedSlowRaw {
    on: Option<bool>,
    trial_slow: Option<bool>,
    rate: Option<f32>,
    med: KnaRaw,
    slow: KnaRaw,
}

impl From<KnaMedSlowRaw> for KnaMedSlowParams {
    fn from(raw: KnaMedSlowRaw) -> Self {
        let preset = KnaMedSlowParams::default();

        KnaMedSlowParams {
            on: raw.on.unwrap_or(preset.on),
            trial_slow: raw.trial_slow.unwrap_or(preset.trial_slow),
            rate: raw.rate.unwrap_or(preset.rate),
            med: raw.med.or(preset.med),
            slow: raw.slow.or(preset.slow),
        }
    }
}

/// Adaptation conductances of [`KnaMedSlow`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KnaMedSlowState {
    /// Medium time scale conductance
    pub med: f32,
    /// Slow time scale conductance
    pub slow: f32,
}

/// Compiled two time scale adaptation channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnaMedSlow<M: Kernels = FastKernels> {
    params: KnaMedSlowParams,
    med: Kna<M>,
    slow: Kna<M>,
}

impl_channel_build!(KnaMedSlowParams, KnaMedSlow);

impl<M: Kernels> KnaMedSlow<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: KnaMedSlowParams) -> Self {
        KnaMedSlow {
            med: Kna::with_kernels(params.med),
            slow: Kna::with_kernels(params.slow),
            params,
        }
    }

    /// Medium time scale channel
    pub fn med(&self) -> &Kna<M> {
        &self.med
    }

    /// Slow time scale channel
    pub fn slow(&self) -> &Kna<M> {
        &self.slow
    }

    /// Updated conductances given whether the neuron spiked this cycle,
    /// slow is left untouched when `trial_slow` is set
    pub fn gc_from_spike(&self, state: &KnaMedSlowState, spike: bool) -> KnaMedSlowState {
        if !self.params.on {
            return KnaMedSlowState::default();
        }

        let med = self.med.gc_from_spike(state.med, spike);
        let slow = if self.params.trial_slow {
            state.slow
        } else {
            self.slow.gc_from_spike(state.slow, spike)
        };

        KnaMedSlowState { med, slow }
    }

    /// Updated conductances from a rate coded activation, `act` is scaled by `rate`
    /// before both time scales are updated, slow is left untouched when `trial_slow` is set
    pub fn gc_from_rate(&self, state: &KnaMedSlowState, act: f32) -> KnaMedSlowState {
        if !self.params.on {
            return KnaMedSlowState::default();
        }

        let act = act * self.params.rate;
        let med = self.med.gc_from_rate(state.med, act);
        let slow = if self.params.trial_slow {
            state.slow
        } else {
            self.slow.gc_from_rate(state.slow, act)
        };

        KnaMedSlowState { med, slow }
    }

    /// Slow conductance after the discrete start of trial increment used with
    /// `trial_slow`, scaled by the calcium level of the previous trial
    pub fn trial_slow_increment(&self, g_slow: f32, ca_d_prev: f32) -> f32 {
        g_slow + self.params.slow.max * ca_d_prev
    }
}

impl<M: Kernels> ChannelKinetics for KnaMedSlow<M> {
    type State = KnaMedSlowState;
    type Input = bool;

    fn resting_state(&self) -> KnaMedSlowState {
        KnaMedSlowState::default()
    }

    fn step(&self, state: &KnaMedSlowState, spike: &bool) -> KnaMedSlowState {
        self.gc_from_spike(state, *spike)
    }

    fn conductance(&self, state: &KnaMedSlowState, _: &bool) -> f32 {
        state.med + state.slow
    }
}
