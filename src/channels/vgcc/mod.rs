//! L-type voltage gated calcium channel (VGCC), following Urakubo et al (2008).
//!
//! Activation `m` and inactivation `h` relax with fixed time constants (3.6 ms and
//! 29 ms), the conductance is `gbar * g(v) * m^3 * h`.

use std::marker::PhantomData;
use serde::{Deserialize, Serialize};
use crate::math::{FastKernels, Kernels};
use super::{impl_channel_build, v_to_bio, ChannelAttributes, ChannelKinetics};


/// Parameters of the VGCC channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ChannelAttributes)]
#[serde(default)]
pub struct VgccParams {
    /// Maximal conductance
    pub gbar: f32,
    /// Multiplier converting conductance into calcium influx
    pub ca: f32,
}

impl Default for VgccParams {
    fn default() -> Self {
        VgccParams { gbar: 0.02, ca: 25. }
    }
}

/// Gating state of [`Vgcc`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VgccState {
    /// Activation gate
    pub m: f32,
    /// Inactivation gate
    pub h: f32,
}

/// Compiled VGCC channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vgcc<M: Kernels = FastKernels> {
    params: VgccParams,
    _kernels: PhantomData<M>,
}

impl_channel_build!(VgccParams, Vgcc);

impl<M: Kernels> Vgcc<M> {
    /// Compiles the given parameters with kernels `M`
    pub fn with_kernels(params: VgccParams) -> Self {
        Vgcc { params, _kernels: PhantomData }
    }

    /// Voltage dependent driving factor from normalized membrane potential
    pub fn g_from_v(&self, vm: f32) -> f32 {
        let vbio = v_to_bio(vm);
        if M::abs(vbio) < 0.1 {
            return 1.0 / (0.0756 * (1.0 + 0.0378 * vbio));
        }

        -vbio / (1.0 - M::exp(0.0756 * vbio))
    }

    /// Asymptotic activation from vbio, saturated outside `[-60, -10]` mV
    pub fn m_from_v(&self, vbio: f32) -> f32 {
        if vbio < -60. {
            return 0.;
        }
        if vbio > -10. {
            return 1.;
        }

        1.0 / (1.0 + M::exp(-(vbio + 37.)))
    }

    /// Asymptotic inactivation from vbio, saturated outside `[-50, -10]` mV
    pub fn h_from_v(&self, vbio: f32) -> f32 {
        if vbio < -50. {
            return 1.;
        }
        if vbio > -10. {
            return 0.;
        }

        1.0 / (1.0 + M::exp((vbio + 41.) * 2.))
    }

    /// Change in `m` and `h` over one cycle from normalized membrane potential,
    /// potentials above 0 mV are treated as 0 mV
    pub fn dmh_from_v(&self, vm: f32, m: f32, h: f32) -> (f32, f32) {
        let vbio = v_to_bio(vm).min(0.);

        let dm = (self.m_from_v(vbio) - m) / 3.6;
        let dh = (self.h_from_v(vbio) - h) / 29.0;

        (dm, dh)
    }

    /// Conductance from normalized membrane potential and the gates
    pub fn gvgcc(&self, vm: f32, m: f32, h: f32) -> f32 {
        self.params.gbar * self.g_from_v(vm) * m * m * m * h
    }

    /// Calcium influx from normalized membrane potential and conductance
    pub fn ca_from_g(&self, vm: f32, g: f32) -> f32 {
        -v_to_bio(vm) * self.params.ca * g
    }
}

impl<M: Kernels> ChannelKinetics for Vgcc<M> {
    type State = VgccState;
    type Input = f32;

    fn resting_state(&self) -> VgccState {
        VgccState { m: self.m_from_v(-70.), h: self.h_from_v(-70.) }
    }

    fn step(&self, state: &VgccState, vm: &f32) -> VgccState {
        let (dm, dh) = self.dmh_from_v(*vm, state.m, state.h);

        VgccState { m: state.m + dm, h: state.h + dh }
    }

    fn conductance(&self, state: &VgccState, vm: &f32) -> f32 {
        self.gvgcc(*vm, state.m, state.h)
    }
}
