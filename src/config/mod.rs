//! Configuration of every channel family at once, loaded from and written to TOML,
//! with string keyed overrides (`"nmda.tau"`) and validation before compiling
//! the parameters into a [`ChannelSet`].
//!
//! ```toml
//! [nmda]
//! gbar = 0.007
//! tau = 200.0
//!
//! [kna.med]
//! rise = 0.03
//!
//! [skca]
//! gbar = 2.0
//! asymptote = "log_saturating"
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::channels::{
    ChannelAttributes,
    a_type_k::{Ak, AkParams, Aks, AksParams},
    gaba_b::{GabaB, GabaBParams},
    kir::{Kir, KirParams},
    kna::{KnaMedSlow, KnaMedSlowParams},
    mahp::{Mahp, MahpParams},
    nmda::{Nmda, NmdaParams},
    sahp::{Sahp, SahpParams},
    skca::{Skca, SkcaParams},
    vgcc::{Vgcc, VgccParams},
};
use crate::error::{ChannelConfigError, ParameterError};
use crate::math::{FastKernels, Kernels};


/// Parameters of every channel family, missing tables fall back to defaults
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsConfig {
    pub ak: AkParams,
    pub aks: AksParams,
    pub gaba_b: GabaBParams,
    pub kir: KirParams,
    pub kna: KnaMedSlowParams,
    pub mahp: MahpParams,
    pub nmda: NmdaParams,
    pub sahp: SahpParams,
    pub skca: SkcaParams,
    pub vgcc: VgccParams,
}

/// Checks that every attribute of a parameter set is finite, that time constants
/// are positive, that maximal conductances are not negative, and that slopes are not 0
fn validate_params<T: ChannelAttributes>(params: &T, channel: &str) -> Result<(), ParameterError> {
    let mut names: Vec<String> = T::attribute_names().into_iter().collect();
    names.sort();

    for attribute in names {
        let value = match params.get_attribute(&attribute) {
            Some(value) => value,
            None => continue,
        };

        if !value.is_finite() {
            return Err(ParameterError::NonFinite { channel: channel.to_string(), attribute });
        }
        if attribute.ends_with("tau") && value <= 0. {
            return Err(
                ParameterError::NonPositiveTimeConstant { channel: channel.to_string(), attribute, value }
            );
        }
        if attribute.starts_with("gbar") && value < 0. {
            return Err(
                ParameterError::NegativeConductance { channel: channel.to_string(), attribute, value }
            );
        }
        if attribute.ends_with("slope") && value == 0. {
            return Err(ParameterError::ZeroSlope { channel: channel.to_string(), attribute });
        }
    }

    Ok(())
}

// `attribute` is always a suffix of `key`
fn unknown_attribute(key: &str, attribute: &str) -> ChannelConfigError {
    let channel = key[..key.len() - attribute.len()].trim_end_matches('.');

    ChannelConfigError::UnknownAttribute {
        channel: channel.to_string(),
        attribute: attribute.to_string(),
    }
}

impl ChannelsConfig {
    /// Parses a configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, ChannelConfigError> {
        let config: ChannelsConfig = toml::from_str(content)?;
        debug!("parsed channel configuration");

        Ok(config)
    }

    /// Writes the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ChannelConfigError> {
        Ok(toml::to_string(self)?)
    }

    // splits `family.attribute` into the parameter set and the attribute name
    fn resolve<'a, 'k>(
        &'a self, key: &'k str
    ) -> Result<(&'a dyn ChannelAttributes, &'k str), ChannelConfigError> {
        let (family, attribute) = match key.split_once('.') {
            Some(split) => split,
            None => return Err(ChannelConfigError::UnknownChannel(key.to_string())),
        };

        let params: &dyn ChannelAttributes = match family {
            "ak" => &self.ak,
            "aks" => &self.aks,
            "gaba_b" => &self.gaba_b,
            "kir" => &self.kir,
            "kna" => match attribute.split_once('.') {
                Some(("med", attribute)) => return Ok((&self.kna.med as &dyn ChannelAttributes, attribute)),
                Some(("slow", attribute)) => return Ok((&self.kna.slow as &dyn ChannelAttributes, attribute)),
                _ => &self.kna,
            },
            "mahp" => &self.mahp,
            "nmda" => &self.nmda,
            "sahp" => &self.sahp,
            "skca" => &self.skca,
            "vgcc" => &self.vgcc,
            _ => return Err(ChannelConfigError::UnknownChannel(family.to_string())),
        };

        Ok((params, attribute))
    }

    fn resolve_mut<'a, 'k>(
        &'a mut self, key: &'k str
    ) -> Result<(&'a mut dyn ChannelAttributes, &'k str), ChannelConfigError> {
        let (family, attribute) = match key.split_once('.') {
            Some(split) => split,
            None => return Err(ChannelConfigError::UnknownChannel(key.to_string())),
        };

        let params: &mut dyn ChannelAttributes = match family {
            "ak" => &mut self.ak,
            "aks" => &mut self.aks,
            "gaba_b" => &mut self.gaba_b,
            "kir" => &mut self.kir,
            "kna" => match attribute.split_once('.') {
                Some(("med", attribute)) => {
                    return Ok((&mut self.kna.med as &mut dyn ChannelAttributes, attribute));
                },
                Some(("slow", attribute)) => {
                    return Ok((&mut self.kna.slow as &mut dyn ChannelAttributes, attribute));
                },
                _ => &mut self.kna,
            },
            "mahp" => &mut self.mahp,
            "nmda" => &mut self.nmda,
            "sahp" => &mut self.sahp,
            "skca" => &mut self.skca,
            "vgcc" => &mut self.vgcc,
            _ => return Err(ChannelConfigError::UnknownChannel(family.to_string())),
        };

        Ok((params, attribute))
    }

    /// Sets a constant addressed by `family.field` (`kna.med.field` or `kna.slow.field`
    /// for the adaptation time scales), `bool` fields are set with `value != 0.`
    pub fn set_attribute(&mut self, key: &str, value: f32) -> Result<(), ChannelConfigError> {
        let result = match self.resolve_mut(key) {
            Ok((params, attribute)) => {
                if params.set_attribute(attribute, value) {
                    Ok(())
                } else {
                    Err(unknown_attribute(key, attribute))
                }
            },
            Err(err) => Err(err),
        };

        match &result {
            Ok(()) => debug!(key, value, "set channel attribute"),
            Err(err) => warn!(key, value, "rejected channel attribute: {}", err),
        }

        result
    }

    /// Gets a constant addressed by `family.field`
    pub fn get_attribute(&self, key: &str) -> Result<f32, ChannelConfigError> {
        let (params, attribute) = self.resolve(key)?;

        match params.get_attribute(attribute) {
            Some(value) => Ok(value),
            None => Err(unknown_attribute(key, attribute)),
        }
    }

    /// Checks every family for values that would produce meaningless kinetics
    pub fn validate(&self) -> Result<(), ParameterError> {
        validate_params(&self.ak, "ak")?;
        validate_params(&self.aks, "aks")?;
        validate_params(&self.gaba_b, "gaba_b")?;
        validate_params(&self.kir, "kir")?;
        validate_params(&self.kna, "kna")?;
        validate_params(&self.kna.med, "kna.med")?;
        validate_params(&self.kna.slow, "kna.slow")?;
        validate_params(&self.mahp, "mahp")?;
        validate_params(&self.nmda, "nmda")?;
        validate_params(&self.sahp, "sahp")?;
        validate_params(&self.skca, "skca")?;
        validate_params(&self.vgcc, "vgcc")?;

        if self.gaba_b.rise_tau == self.gaba_b.decay_tau {
            return Err(ParameterError::DegenerateBiExponential { channel: String::from("gaba_b") });
        }

        Ok(())
    }

    /// Validates and compiles every family with the default fast kernels
    pub fn build(&self) -> Result<ChannelSet, ChannelConfigError> {
        self.build_with::<FastKernels>()
    }

    /// Validates and compiles every family with kernels `M`
    pub fn build_with<M: Kernels>(&self) -> Result<ChannelSet<M>, ChannelConfigError> {
        if let Err(err) = self.validate() {
            warn!("invalid channel configuration: {}", err);
            return Err(err.into());
        }

        let set = ChannelSet {
            ak: self.ak.build_with::<M>(),
            aks: self.aks.build_with::<M>(),
            gaba_b: self.gaba_b.build_with::<M>(),
            kir: self.kir.build_with::<M>(),
            kna: self.kna.build_with::<M>(),
            mahp: self.mahp.build_with::<M>(),
            nmda: self.nmda.build_with::<M>(),
            sahp: self.sahp.build_with::<M>(),
            skca: self.skca.build_with::<M>(),
            vgcc: self.vgcc.build_with::<M>(),
        };
        debug!("compiled channel set");

        Ok(set)
    }
}

/// Compiled channels of every family, shared read only while simulating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelSet<M: Kernels = FastKernels> {
    pub ak: Ak<M>,
    pub aks: Aks<M>,
    pub gaba_b: GabaB<M>,
    pub kir: Kir<M>,
    pub kna: KnaMedSlow<M>,
    pub mahp: Mahp<M>,
    pub nmda: Nmda<M>,
    pub sahp: Sahp<M>,
    pub skca: Skca<M>,
    pub vgcc: Vgcc<M>,
}

impl Default for ChannelSet {
    fn default() -> Self {
        ChannelSet {
            ak: Ak::default(),
            aks: Aks::default(),
            gaba_b: GabaB::default(),
            kir: Kir::default(),
            kna: KnaMedSlow::default(),
            mahp: Mahp::default(),
            nmda: Nmda::default(),
            sahp: Sahp::default(),
            skca: Skca::default(),
            vgcc: Vgcc::default(),
        }
    }
}
