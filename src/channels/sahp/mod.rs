//! Slow afterhyperpolarizing (sAHP) potassium channel, a calcium gated channel
//! driven by the running average of calcium over theta cycles.
//!
//! The gate uses the same logistic rates as [`Mahp`](super::mahp::Mahp) but centered
//! on a calcium level rather than a voltage. Its effective time constant is folded
//! into the calcium integration, so [`ChannelKinetics::step`] sets `n` directly to
//! its asymptote instead of integrating it.

use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crate::math::{FastKernels, Kernels};
use super::{efun, impl_channel_build, ChannelAttributes, ChannelKinetics};


/// Parameters of the sAHP channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct SahpParams {
    /// Maximal conductance
    pub gbar: f32,
    /// Time constant (theta cycles) for integrating calcium
    pub ca_tau: f32,
    /// Integrated calcium at which the asymptotic gate is at 50%
    pub off: f32,
    /// Slope of the asymptotic gating function
    pub slope: f32,
    /// Maximum slow rate time constant (theta cycles)
    pub tau_max: f32,
}

impl Default for SahpParams {
    fn default() -> Self {
        SahpParams {
            gbar: 0.05,
            ca_tau: 5.,
            off: 0.8,
            slope: 0.02,
            tau_max: 1.,
        }
    }
}

/// State of [`Sahp`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SahpState {
    /// Calcium integrated over theta cycles
    pub ca_int: f32,
    /// Activation gate
    pub n: f32,
}

/// Compiled sAHP channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sahp<M: Kernels = FastKernels> {
    params: SahpParams,
    ca_dt: f32,
    dt_max: f32,
    _kernels: PhantomData<M>,
}

impl_channel_build!(SahpParams, Sahp);

impl<M: Kernels> Sahp<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: SahpParams) -> Self {
        Sahp {
            ca_dt: 1. / params.ca_tau,
            dt_max: 1. / params.tau_max,
            params,
            _kernels: PhantomData,
        }
    }

    /// Asymptotic n and its time constant from integrated calcium
    pub fn ninf_tau_from_ca(&self, ca: f32) -> (f32, f32) {
        let co = ca - self.params.off;
        let rate = self.dt_max * self.params.slope;

        let a = rate * efun::<M>(-co / self.params.slope);
        let b = rate * efun::<M>(co / self.params.slope);

        let tau = 1.0 / (a + b);

        (a * tau, tau)
    }

    /// Updated running average of calcium
    pub fn ca_int(&self, ca_int: f32, ca: f32) -> f32 {
        ca_int + self.ca_dt * (ca - ca_int)
    }

    /// Change in n from integrated calcium
    pub fn dn_from_ca(&self, ca: f32, n: f32) -> f32 {
        let (ninf, tau) = self.ninf_tau_from_ca(ca);

        (ninf - n) / tau
    }

    /// Conductance from the gate
    pub fn gsahp(&self, n: f32) -> f32 {
        self.params.gbar * n
    }
}

impl<M: Kernels> ChannelKinetics for Sahp<M> {
    type State = SahpState;
    type Input = f32;

    fn resting_state(&self) -> SahpState {
        SahpState::default()
    }

    fn step(&self, state: &SahpState, ca: &f32) -> SahpState {
        let ca_int = self.ca_int(state.ca_int, *ca);

        SahpState { ca_int, n: self.ninf_tau_from_ca(ca_int).0 }
    }

    fn conductance(&self, state: &SahpState, _: &f32) -> f32 {
        self.gsahp(state.n)
    }
}
