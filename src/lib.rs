//! # Channel Kinetics
//!
//! `channel_kinetics` is a package of biophysical ion channel models used inside
//! spiking point neuron simulations. Each channel computes a time varying conductance
//! from membrane potential, spiking, or calcium following published electrophysiology:
//! A-type potassium, GABA-B, Kir, sodium gated potassium adaptation, mAHP, NMDA,
//! sAHP, SK calcium gated potassium, and L-type voltage gated calcium channels.
//!
//! Channels are configured through plain parameter structs and compiled into immutable
//! channels that cache every derived constant, so a channel can never be simulated
//! with constants that are out of date with its parameters. Every compiled channel
//! implements [`ChannelKinetics`](channels::ChannelKinetics) with a pure per cycle
//! update, the caller owns the per neuron state.
//!
//! ## Example Code
//!
//! ### Stepping a channel with membrane potential input
//!
//! ```rust
//! use channel_kinetics::channels::{
//!     ChannelKinetics, v_from_bio,
//!     vgcc::VgccParams,
//! };
//!
//! let vgcc = VgccParams::default().build();
//! let mut state = vgcc.resting_state();
//!
//! // depolarize to -20 mV
//! let vm = v_from_bio(-20.);
//! for _ in 0..100 {
//!     state = vgcc.step(&state, &vm);
//! }
//!
//! let g = vgcc.conductance(&state, &vm);
//! assert!(g > 0.);
//! ```
//!
//! ### Changing parameters
//!
//! ```rust
//! use channel_kinetics::channels::{
//!     ChannelAttributes, ChannelKinetics,
//!     nmda::{NmdaInput, NmdaParams},
//! };
//!
//! let mut params = NmdaParams::default();
//! assert!(params.set_attribute("tau", 200.));
//!
//! // derived constants come from the new time constant
//! let nmda = params.build();
//! assert_eq!(nmda.dt(), 1. / 200.);
//!
//! let state = nmda.step(&nmda.resting_state(), &NmdaInput { raw: 1., vm: 0.5 });
//! assert_eq!(state.syn, 1.);
//! ```
//!
//! ### Loading a configuration
//!
//! ```rust
//! use channel_kinetics::{config::ChannelsConfig, error::ChannelKineticsError};
//!
//! fn main() -> Result<(), ChannelKineticsError> {
//!     let mut config = ChannelsConfig::from_toml_str(r#"
//!         [gaba_b]
//!         gbar = 0.012
//!
//!         [kna.slow]
//!         on = false
//!     "#)?;
//!     config.set_attribute("skca.gbar", 2.)?;
//!
//!     let channels = config.build()?;
//!     assert_eq!(channels.gaba_b.params().gbar, 0.012);
//!     assert_eq!(channels.skca.params().gbar, 2.);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Stepping a population in parallel
//!
//! ```rust
//! use channel_kinetics::{
//!     channels::kna::{KnaMedSlowParams, KnaMedSlowState},
//!     population::{conductances, resting_population, step_population},
//! };
//!
//! let kna = KnaMedSlowParams::default().build();
//! let mut states = resting_population(&kna, 1000);
//! let spikes: Vec<bool> = (0..1000).map(|i| i % 3 == 0).collect();
//!
//! step_population(&kna, &mut states, &spikes).unwrap();
//! let gs = conductances(&kna, &states, &spikes).unwrap();
//!
//! assert!(gs[0] > 0.);
//! assert_eq!(states[1], KnaMedSlowState::default());
//! ```

pub mod channels;
pub mod config;
pub mod error;
pub mod math;
pub mod population;
