//! Inwardly rectifying potassium channel (Kir), following Lindroos et al (2018),
//! with conductance highest at low membrane potentials.

use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crate::math::{FastKernels, Kernels};
use super::{impl_channel_build, v_to_bio, ChannelAttributes, ChannelKinetics};


/// Parameters of the Kir channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct KirParams {
    /// Overall strength of the current
    pub gbar: f32,
    /// 10 degree temperature correction factor
    pub q10: f32,
    /// Offset of asymptotic m (mV)
    pub minf_off: f32,
    /// Slope of asymptotic m (mV)
    pub minf_tau: f32,
    /// Offset of the voltage dependent rise rate (mV)
    pub rise_off: f32,
    /// Slope of the voltage dependent rise rate (mV)
    pub rise_tau: f32,
    /// Offset of the voltage dependent decay rate (mV)
    pub decay_off: f32,
    /// Slope of the voltage dependent decay rate (mV)
    pub decay_tau: f32,
}

impl Default for KirParams {
    fn default() -> Self {
        KirParams {
            gbar: 0.,
            q10: 3.,
            minf_off: -102.,
            minf_tau: 13.,
            rise_off: -60.,
            rise_tau: 14.,
            decay_off: -31.,
            decay_tau: 23.,
        }
    }
}

/// Gating state of [`Kir`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KirState {
    /// Activation gate
    pub m: f32,
}

/// Compiled Kir channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kir<M: Kernels = FastKernels> {
    params: KirParams,
    /// Asymptotic m at -70 mV
    m_rest: f32,
    _kernels: PhantomData<M>,
}

impl_channel_build!(KirParams, Kir);

impl<M: Kernels> Kir<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: KirParams) -> Self {
        let mut kir = Kir { params, m_rest: 0., _kernels: PhantomData };
        kir.m_rest = kir.minf(-70.);

        kir
    }

    /// Asymptotic m at rest (-70 mV)
    pub fn m_rest(&self) -> f32 {
        self.m_rest
    }

    /// Asymptotic m from vbio
    pub fn minf(&self, vbio: f32) -> f32 {
        1.0 / (1. + M::exp((vbio - self.params.minf_off) / self.params.minf_tau))
    }

    /// Asymptotic m and its time constant (ms) from vbio
    pub fn m_rates(&self, vbio: f32) -> (f32, f32) {
        let minf = self.minf(vbio);
        let alpha = 0.1 * M::exp((vbio - self.params.rise_off) / (-self.params.rise_tau));
        let beta = 0.27 / (1. + M::exp((vbio - self.params.decay_off) / (-self.params.decay_tau)));

        (minf, 1.0 / (alpha + beta))
    }

    /// Change in m over one cycle from vbio
    pub fn dm(&self, vbio: f32, m: f32) -> f32 {
        let (minf, mtau) = self.m_rates(vbio);

        (minf - m) / (mtau * self.params.q10)
    }

    /// Conductance from the gate
    pub fn gkir(&self, m: f32) -> f32 {
        self.params.gbar * m
    }

    /// Conductance from the current gate followed by the advanced state,
    /// matching hosts that read the conductance before updating the gate
    pub fn gkir_step(&self, vm: f32, state: &KirState) -> (f32, KirState) {
        let g = self.gkir(state.m);
        let m = state.m + self.dm(v_to_bio(vm), state.m);

        (g, KirState { m })
    }
}

impl<M: Kernels> ChannelKinetics for Kir<M> {
    type State = KirState;
    type Input = f32;

    fn resting_state(&self) -> KirState {
        KirState { m: self.m_rest }
    }

    fn step(&self, state: &KirState, vm: &f32) -> KirState {
        KirState { m: state.m + self.dm(v_to_bio(*vm), state.m) }
    }

    fn conductance(&self, state: &KirState, _: &f32) -> f32 {
        self.gkir(state.m)
    }
}
