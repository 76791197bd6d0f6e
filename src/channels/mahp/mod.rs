//! M-type medium afterhyperpolarizing (mAHP) potassium channel, where the m also
//! stands for muscarinic since acetylcholine inactivates it. It opens at lowish
//! membrane potentials with slow, voltage dependent activation and deactivation.
//!
//! The single gate `n` relaxes toward a logistic function of the membrane potential
//! centered at `voff` with slope `vslope`.

use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crate::math::{FastKernels, Kernels};
use super::{efun, impl_channel_build, v_to_bio, ChannelAttributes, ChannelKinetics};


/// Parameters of the mAHP channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct MahpParams {
    /// Maximal conductance
    pub gbar: f32,
    /// Voltage (mV) at which the asymptotic gate is at 50%
    pub voff: f32,
    /// Slope of the asymptotic gating function
    pub vslope: f32,
    /// Maximum slow rate time constant (ms) for activation and deactivation,
    /// the effective tau is much faster after temperature adjustment
    pub tau_max: f32,
}

impl Default for MahpParams {
    fn default() -> Self {
        MahpParams {
            gbar: 0.02,
            voff: -30.,
            vslope: 9.,
            tau_max: 1000.,
        }
    }
}

/// Gating state of [`Mahp`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MahpState {
    /// Activation gate
    pub n: f32,
}

/// Compiled mAHP channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mahp<M: Kernels = FastKernels> {
    params: MahpParams,
    /// Temperature adjustment from the recording temperature of 23 C to 37 C
    tadj: f32,
    dt_max: f32,
    _kernels: PhantomData<M>,
}

impl_channel_build!(MahpParams, Mahp);

impl<M: Kernels> Mahp<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: MahpParams) -> Self {
        Mahp {
            tadj: M::pow(2.3, (37.0 - 23.0) / 10.0),
            dt_max: 1.0 / params.tau_max,
            params,
            _kernels: PhantomData,
        }
    }

    /// Temperature adjustment factor (about 3.2)
    pub fn tadj(&self) -> f32 {
        self.tadj
    }

    /// Asymptotic n and its temperature adjusted time constant from vbio
    pub fn ninf_tau_from_v(&self, vbio: f32) -> (f32, f32) {
        let vo = vbio - self.params.voff;
        let rate = self.dt_max * self.params.vslope;

        let a = rate * efun::<M>(-vo / self.params.vslope);
        let b = rate * efun::<M>(vo / self.params.vslope);

        let tau = 1.0 / (a + b);
        let ninf = a * tau;

        (ninf, tau / self.tadj)
    }

    /// Asymptotic n and time constant from normalized membrane potential
    pub fn ninf_tau_from_vnorm(&self, vm: f32) -> (f32, f32) {
        self.ninf_tau_from_v(v_to_bio(vm))
    }

    /// Change in n over one cycle from normalized membrane potential
    pub fn dn_from_v(&self, vm: f32, n: f32) -> f32 {
        let (ninf, tau) = self.ninf_tau_from_vnorm(vm);

        (ninf - n) / tau
    }

    /// Conductance from the gate
    pub fn gmahp(&self, n: f32) -> f32 {
        self.tadj * self.params.gbar * n
    }

    /// Advances the gate and returns the conductance from the advanced gate
    /// along with the new state
    pub fn gmahp_step(&self, vm: f32, state: &MahpState) -> (f32, MahpState) {
        let n = state.n + self.dn_from_v(vm, state.n);

        (self.gmahp(n), MahpState { n })
    }
}

impl<M: Kernels> ChannelKinetics for Mahp<M> {
    type State = MahpState;
    type Input = f32;

    fn resting_state(&self) -> MahpState {
        MahpState { n: self.ninf_tau_from_v(-70.).0 }
    }

    fn step(&self, state: &MahpState, vm: &f32) -> MahpState {
        MahpState { n: state.n + self.dn_from_v(*vm, state.n) }
    }

    fn conductance(&self, state: &MahpState, _: &f32) -> f32 {
        self.gmahp(state.n)
    }
}
