//! Data parallel stepping of many neurons sharing one compiled channel.
//!
//! Each neuron's state is written by exactly one worker and the channel is only read,
//! so results are identical to stepping the neurons one after another.

use rayon::prelude::*;
use crate::channels::ChannelKinetics;
use crate::error::PopulationError;


fn check_lengths(states: usize, inputs: usize) -> Result<(), PopulationError> {
    if states != inputs {
        return Err(PopulationError::LengthMismatch { states, inputs });
    }

    Ok(())
}

/// Resting state for `n` neurons
pub fn resting_population<C: ChannelKinetics>(channel: &C, n: usize) -> Vec<C::State> {
    vec![channel.resting_state(); n]
}

/// Advances every state by one cycle given the matching input
pub fn step_population<C: ChannelKinetics>(
    channel: &C,
    states: &mut [C::State],
    inputs: &[C::Input],
) -> Result<(), PopulationError> {
    check_lengths(states.len(), inputs.len())?;

    states.par_iter_mut()
        .zip(inputs.par_iter())
        .for_each(|(state, input)| {
            *state = channel.step(state, input);
        });

    Ok(())
}

/// Conductance of every neuron given its state and input
pub fn conductances<C: ChannelKinetics>(
    channel: &C,
    states: &[C::State],
    inputs: &[C::Input],
) -> Result<Vec<f32>, PopulationError> {
    check_lengths(states.len(), inputs.len())?;

    Ok(
        states.par_iter()
            .zip(inputs.par_iter())
            .map(|(state, input)| channel.conductance(state, input))
            .collect()
    )
}
