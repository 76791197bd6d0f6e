//! Biophysical ion channel models driven by membrane potential, spiking, or calcium,
//! each split into user facing parameters (`...Params`) and a compiled channel that
//! holds every derived constant and exposes the per cycle update and conductance
//! functions.
//!
//! Membrane potential is passed around either normalized (`vm`, roughly `[0, 1]`)
//! or in biological millivolts (`vbio`), see [`v_to_bio`] and [`v_from_bio`].
//! All time constants are in cycles (ms), so every update is a single `dt = 1` step.

use std::collections::HashSet;
use crate::math::Kernels;
pub mod a_type_k;
pub mod gaba_b;
pub mod kir;
pub mod kna;
pub mod mahp;
pub mod nmda;
pub mod sahp;
pub mod skca;
pub mod vgcc;
/// Derive macro giving string keyed access to the fields of a parameter struct
pub use channel_attributes::ChannelAttributes;


/// Converts normalized membrane potential to biological units (mV)
pub fn v_to_bio(vm: f32) -> f32 {
    vm * 100. - 100.
}

/// Converts biological membrane potential (mV) to normalized units
pub fn v_from_bio(vbio: f32) -> f32 {
    (vbio + 100.) / 100.
}

/// Evaluates `z / (e^z - 1)` without the `0 / 0` singularity at `z = 0`,
/// using `1 - z / 2` when `|z| < 1e-4`
pub fn efun<M: Kernels>(z: f32) -> f32 {
    if M::abs(z) < 1.0e-4 {
        return 1.0 - 0.5 * z;
    }

    z / (M::exp(z) - 1.0)
}

/// Reads and writes the scalar fields of a parameter set by name
pub trait ChannelAttributes {
    /// Gets the value of the given field, `bool` fields are read as `0.` or `1.`
    fn get_attribute(&self, attribute: &str) -> Option<f32>;
    /// Sets the given field, returns `false` if there is no such field
    fn set_attribute(&mut self, attribute: &str, value: f32) -> bool;
    /// Names of every accessible field
    fn attribute_names() -> HashSet<String> where Self: Sized;
}

/// Per cycle dynamics of a compiled channel
///
/// `step` is pure, the caller owns the per neuron `State` and replaces it with the
/// returned value, so the channel itself can be shared across threads while stepping
/// many neurons
pub trait ChannelKinetics: Send + Sync {
    /// Per neuron gating state
    type State: Copy + Default + Send + Sync;
    /// Per cycle drive (membrane potential, spiking, calcium, ...)
    type Input: Copy + Send + Sync;

    /// State a neuron starts with at reset
    fn resting_state(&self) -> Self::State;
    /// Advances the state by one cycle
    fn step(&self, state: &Self::State, input: &Self::Input) -> Self::State;
    /// Instantaneous conductance given the current state
    fn conductance(&self, state: &Self::State, input: &Self::Input) -> f32;
}

/// Implements the constructors shared by every compiled channel, the channel must
/// define `with_kernels(params)`
macro_rules! impl_channel_build {
    ($params:ident, $channel:ident) => {
        impl $params {
            /// Compiles the parameters with the default fast kernels
            pub fn build(&self) -> $channel<$crate::math::FastKernels> {
                $channel::with_kernels(*self)
            }

            /// Compiles the parameters with the given kernels
            pub fn build_with<M: $crate::math::Kernels>(&self) -> $channel<M> {
                $channel::with_kernels(*self)
            }
        }

        impl $channel<$crate::math::FastKernels> {
            /// Compiles the given parameters with the default fast kernels
            pub fn new(params: $params) -> Self {
                $channel::with_kernels(params)
            }
        }

        impl<M: $crate::math::Kernels> $channel<M> {
            /// Parameters the channel was compiled from
            pub fn params(&self) -> &$params {
                &self.params
            }
        }

        impl<M: $crate::math::Kernels> Default for $channel<M> {
            fn default() -> Self {
                $channel::with_kernels($params::default())
            }
        }

        impl<M: $crate::math::Kernels> From<$params> for $channel<M> {
            fn from(params: $params) -> Self {
                $channel::with_kernels(params)
            }
        }
    }
}

pub(crate) use impl_channel_build;
