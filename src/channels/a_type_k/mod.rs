//! A-type potassium channels, voltage gated with maximal activation around -37 mV,
//! which keep voltage gated calcium channels from driving runaway excitation.
//!
//! [`Ak`] is the full two gate model with fast opening (`m`) and slow inactivation (`h`),
//! [`Aks`] is a stateless approximation that only keeps a capped activation curve and
//! works well when full action potentials are not simulated.

use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crate::math::{FastKernels, Kernels};
use super::{impl_channel_build, v_to_bio, ChannelAttributes, ChannelKinetics};


/// Parameters of the full A-type potassium channel, defaults to distal dendrites
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct AkParams {
    /// Maximal conductance
    pub gbar: f32,
    /// Multiplier for the beta term, `0.01446` distal and `0.02039` proximal
    pub beta: f32,
    /// Dm factor, `0.5` distal and `0.25` proximal
    pub dm: f32,
    /// Offset for k, `1.8` distal and `1.5` proximal
    pub koff: f32,
    /// Voltage offset for alpha and beta (mV), `1` distal and `11` proximal
    pub voff: f32,
    /// Multiplier on the h gate slope, `0.1133` distal and `0.1112` proximal
    pub hf: f32,
}

impl Default for AkParams {
    fn default() -> Self {
        AkParams {
            gbar: 0.01,
            beta: 0.01446,
            dm: 0.5,
            koff: 1.8,
            voff: 1.,
            hf: 0.1133,
        }
    }
}

impl AkParams {
    /// Parameters for distal dendrites
    pub fn distal() -> Self {
        AkParams::default()
    }

    /// Parameters for proximal dendrites
    pub fn proximal() -> Self {
        AkParams {
            beta: 0.02039,
            dm: 0.25,
            koff: 1.5,
            voff: 11.,
            hf: 0.1112,
            ..AkParams::default()
        }
    }
}

/// Gating state of [`Ak`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AkState {
    /// Voltage gated opening
    pub m: f32,
    /// Voltage gated closing
    pub h: f32,
}

/// Compiled full A-type potassium channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ak<M: Kernels = FastKernels> {
    params: AkParams,
    _kernels: PhantomData<M>,
}

impl_channel_build!(AkParams, Ak);

// vbio arguments below must not exceed 0
impl<M: Kernels> Ak<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: AkParams) -> Self {
        Ak { params, _kernels: PhantomData }
    }

    /// Alpha rate from vbio and k
    pub fn alpha_from_vk(&self, vbio: f32, k: f32) -> f32 {
        M::exp(0.03707 * k * (vbio - self.params.voff))
    }

    /// Beta rate from vbio and k
    pub fn beta_from_vk(&self, vbio: f32, k: f32) -> f32 {
        M::exp(self.params.beta * k * (vbio - self.params.voff))
    }

    /// k factor from vbio
    pub fn k_from_v(&self, vbio: f32) -> f32 {
        -self.params.koff - 1.0 / (1.0 + M::exp((vbio + 40.) / 5.))
    }

    /// Asymptotic h gate from vbio
    pub fn h_from_v(&self, vbio: f32) -> f32 {
        1.0 / (1.0 + M::exp(self.params.hf * (vbio + 56.)))
    }

    /// h time constant (ms) from vbio, at least 2 ms
    pub fn h_tau_from_v(&self, vbio: f32) -> f32 {
        (0.26 * (vbio + 50.)).max(2.)
    }

    /// Asymptotic m gate from alpha
    pub fn m_from_alpha(&self, alpha: f32) -> f32 {
        1.0 / (1.0 + alpha)
    }

    /// m time constant (ms) from alpha and beta, at least 1 ms
    pub fn m_tau_from_alpha_beta(&self, alpha: f32, beta: f32) -> f32 {
        1. + beta / (self.params.dm * (1. + alpha))
    }

    /// Change in `m` and `h` over one cycle from normalized membrane potential,
    /// potentials above 0 mV are treated as 0 mV
    pub fn dmh_from_v(&self, vm: f32, m: f32, h: f32) -> (f32, f32) {
        let vbio = v_to_bio(vm).min(0.);

        let k = self.k_from_v(vbio);
        let a = self.alpha_from_vk(vbio, k);
        let b = self.beta_from_vk(vbio, k);
        let mt = self.m_tau_from_alpha_beta(a, b);
        let ht = self.h_tau_from_v(vbio);

        let dm = (self.m_from_alpha(a) - m) / mt;
        let dh = (self.h_from_v(vbio) - h) / ht;

        (dm, dh)
    }

    /// Net conductance from the gates
    pub fn gak(&self, m: f32, h: f32) -> f32 {
        self.params.gbar * m * h
    }
}

impl<M: Kernels> ChannelKinetics for Ak<M> {
    type State = AkState;
    type Input = f32;

    fn resting_state(&self) -> AkState {
        let vbio = -70.;
        let k = self.k_from_v(vbio);

        AkState {
            m: self.m_from_alpha(self.alpha_from_vk(vbio, k)),
            h: self.h_from_v(vbio),
        }
    }

    fn step(&self, state: &AkState, vm: &f32) -> AkState {
        let (dm, dh) = self.dmh_from_v(*vm, state.m, state.h);

        AkState { m: state.m + dm, h: state.h + dh }
    }

    fn conductance(&self, state: &AkState, _: &f32) -> f32 {
        self.gak(state.m, state.h)
    }
}

/// Parameters of the simplified stateless A-type potassium channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct AksParams {
    /// Maximal conductance
    pub gbar: f32,
    /// Constant multiplier standing in for a fully available h gate
    pub hf: f32,
    /// Slope of the m function
    pub mf: f32,
    /// Voltage offset of the m function (mV)
    pub voff: f32,
    /// Voltage of maximal opening (mV), the m function stays flat above it
    pub vmax: f32,
}

impl Default for AksParams {
    fn default() -> Self {
        AksParams {
            gbar: 0.1,
            hf: 0.076,
            mf: 0.075,
            voff: 2.,
            vmax: -37.,
        }
    }
}

/// Compiled simplified A-type potassium channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aks<M: Kernels = FastKernels> {
    params: AksParams,
    _kernels: PhantomData<M>,
}

impl_channel_build!(AksParams, Aks);

impl<M: Kernels> Aks<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: AksParams) -> Self {
        Aks { params, _kernels: PhantomData }
    }

    /// m gate from vbio, plateaus above `vmax`
    pub fn m_from_v(&self, vbio: f32) -> f32 {
        let av = vbio.min(self.params.vmax);

        self.params.hf / (1.0 + M::exp(-self.params.mf * (av + self.params.voff)))
    }

    /// m gate from normalized membrane potential
    pub fn m_from_vnorm(&self, vm: f32) -> f32 {
        self.m_from_v(v_to_bio(vm))
    }

    /// Conductance from normalized membrane potential
    pub fn gak(&self, vm: f32) -> f32 {
        self.params.gbar * self.m_from_vnorm(vm)
    }
}

impl<M: Kernels> ChannelKinetics for Aks<M> {
    type State = ();
    type Input = f32;

    fn resting_state(&self) {}

    fn step(&self, _: &(), _: &f32) {}

    fn conductance(&self, _: &(), vm: &f32) -> f32 {
        self.gak(*vm)
    }
}
