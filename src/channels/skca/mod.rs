//! Small conductance calcium gated potassium channel (SK), following Fujita et al (2012)
//! and Gunay et al (2008), mostly studied in the subthalamic nucleus and globus pallidus.
//!
//! Calcium is released from an intracellular store on each spike (`ca_in` to `ca_r`).
//! The released calcium drives the `m` gate with separate activation and deactivation
//! time constants, then decays away while the store slowly recovers during low
//! activity.

use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crate::math::{FastKernels, Kernels};
use super::{impl_channel_build, ChannelAttributes, ChannelKinetics};


/// Asymptotic gating function used by [`Skca`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkcaAsymptote {
    /// `ca^hill / (ca^hill + c50^hill)`
    #[default]
    Hill,
    /// Log saturating form of Gunay et al (2008)
    LogSaturating,
}

/// Parameters of the SK channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct SkcaParams {
    /// Maximal conductance, 0 disables the channel
    pub gbar: f32,
    /// Hill coefficient of the asymptotic gate
    pub hill: f32,
    /// Calcium at which the Hill asymptote is at 50%
    pub c50: f32,
    /// Activation time constant (ms) while the gate is rising
    pub act_tau: f32,
    /// Deactivation time constant (ms) while the gate is falling
    pub de_tau: f32,
    /// Fraction of the store released on each spike
    pub kca_r: f32,
    /// Decay time constant (ms) of released calcium
    pub ca_r_decay_tau: f32,
    /// Activity level (`ca_d`) below which the store recovers
    pub ca_in_thr: f32,
    /// Recovery time constant (ms) of the store
    pub ca_in_tau: f32,
    /// Which asymptotic gating function is active
    pub asymptote: SkcaAsymptote,
}

impl Default for SkcaParams {
    fn default() -> Self {
        SkcaParams {
            gbar: 0.,
            hill: 4.,
            c50: 0.5,
            act_tau: 15.,
            de_tau: 30.,
            kca_r: 0.8,
            ca_r_decay_tau: 150.,
            ca_in_thr: 0.01,
            ca_in_tau: 50.,
            asymptote: SkcaAsymptote::Hill,
        }
    }
}

/// State of [`Skca`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkcaState {
    /// Calcium available in the intracellular store
    pub ca_in: f32,
    /// Released calcium
    pub ca_r: f32,
    /// Activation gate
    pub m: f32,
}

/// Input for one cycle of [`Skca`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkcaInput {
    pub spike: bool,
    /// Time integrated calcium activity
    pub ca_d: f32,
}

/// Compiled SK channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skca<M: Kernels = FastKernels> {
    params: SkcaParams,
    /// `c50 ^ hill`
    c50_hill: f32,
    act_dt: f32,
    de_dt: f32,
    ca_r_decay_dt: f32,
    ca_in_dt: f32,
    _kernels: PhantomData<M>,
}

impl_channel_build!(SkcaParams, Skca);

impl<M: Kernels> Skca<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: SkcaParams) -> Self {
        Skca {
            c50_hill: M::pow(params.c50, params.hill),
            act_dt: 1. / params.act_tau,
            de_dt: 1. / params.de_tau,
            ca_r_decay_dt: 1. / params.ca_r_decay_tau,
            ca_in_dt: 1. / params.ca_in_tau,
            params,
            _kernels: PhantomData,
        }
    }

    /// Hill asymptote of the gate from calcium
    pub fn m_asymp_hill(&self, ca: f32) -> f32 {
        let ca_pow = M::pow(ca, self.params.hill);

        ca_pow / (ca_pow + self.c50_hill)
    }

    /// Log saturating asymptote of the gate from calcium, calcium below `0.001` is
    /// treated as `0.001`
    pub fn m_asymp_log(&self, ca: f32) -> f32 {
        let ca = ca.max(0.001);

        0.81 / (1.0 + M::exp(-(M::log(ca) + 0.3)) / 0.46)
    }

    /// Asymptote selected by the parameters
    pub fn m_asymp(&self, ca: f32) -> f32 {
        match self.params.asymptote {
            SkcaAsymptote::Hill => self.m_asymp_hill(ca),
            SkcaAsymptote::LogSaturating => self.m_asymp_log(ca),
        }
    }

    /// Updated gate relaxing toward the asymptote of the released calcium
    pub fn m_from_ca(&self, ca_r: f32, m: f32) -> f32 {
        let m_asymp = self.m_asymp(ca_r);

        if m_asymp > m {
            m + self.act_dt * (m_asymp - m)
        } else {
            m + self.de_dt * (m_asymp - m)
        }
    }

    /// Updated `(ca_in, ca_r)`: released calcium decays, a spike moves `kca_r` of the
    /// store into released calcium, and the store recovers while `ca_d` is below
    /// `ca_in_thr`
    pub fn ca_in_r_from_spike(&self, spike: bool, ca_d: f32, ca_in: f32, ca_r: f32) -> (f32, f32) {
        let mut ca_in = ca_in;
        let mut ca_r = ca_r - ca_r * self.ca_r_decay_dt;

        if spike {
            let released = ca_in * self.params.kca_r;
            ca_r += released;
            ca_in -= released;
        }

        if ca_d < self.params.ca_in_thr {
            ca_in += self.ca_in_dt * (1.0 - ca_in);
        }

        (ca_in, ca_r)
    }

    /// Conductance from the gate
    pub fn gskca(&self, m: f32) -> f32 {
        self.params.gbar * m
    }
}

impl<M: Kernels> ChannelKinetics for Skca<M> {
    type State = SkcaState;
    type Input = SkcaInput;

    fn resting_state(&self) -> SkcaState {
        SkcaState { ca_in: 1., ca_r: 0., m: 0. }
    }

    fn step(&self, state: &SkcaState, input: &SkcaInput) -> SkcaState {
        let m = self.m_from_ca(state.ca_r, state.m);
        let (ca_in, ca_r) = self.ca_in_r_from_spike(input.spike, input.ca_d, state.ca_in, state.ca_r);

        SkcaState { ca_in, ca_r, m }
    }

    fn conductance(&self, state: &SkcaState, _: &SkcaInput) -> f32 {
        self.gskca(state.m)
    }
}
