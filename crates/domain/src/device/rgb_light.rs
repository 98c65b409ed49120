//! RGB light — an on/off light with three colour channels.

use crate::device::{Actuator, Appliance, DeviceKind};
use crate::dto::RgbLightDto;
use crate::error::ValidationError;
use crate::label::Label;
use crate::state_machine::{Transition, TransitionTable};

/// Colour of an RGB light, one byte per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Clamp a requested intensity into `0..=255`.
#[must_use]
pub fn clamp_channel(value: i64) -> u8 {
    u8::try_from(value.clamp(0, i64::from(u8::MAX))).unwrap_or(u8::MAX)
}

/// A light that can be switched on and off and whose colour can be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbLight {
    actuator: Actuator,
    color: Rgb,
}

impl RgbLight {
    pub const ON: &'static str = "On";
    pub const OFF: &'static str = "Off";

    pub const TURN_ON: &'static str = "TurnOn";
    pub const TURN_OFF: &'static str = "TurnOff";

    /// Switched-off light with every channel at zero.
    #[must_use]
    pub fn new(label: Label) -> Self {
        Self {
            actuator: Actuator::new(label, &TABLE),
            color: Rgb::default(),
        }
    }

    /// Switched-off light with the given colour (channels are clamped).
    #[must_use]
    pub fn with_color(label: Label, red: i64, green: i64, blue: i64) -> Self {
        let mut light = Self::new(label);
        light.set_rgb(red, green, blue);
        light
    }

    pub fn switch_on(&mut self) {
        self.actuator.control_signal(Self::TURN_ON);
    }

    pub fn switch_off(&mut self) {
        self.actuator.control_signal(Self::TURN_OFF);
    }

    #[must_use]
    pub fn rgb(&self) -> Rgb {
        self.color
    }

    #[must_use]
    pub fn red(&self) -> u8 {
        self.color.red
    }

    #[must_use]
    pub fn green(&self) -> u8 {
        self.color.green
    }

    #[must_use]
    pub fn blue(&self) -> u8 {
        self.color.blue
    }

    pub fn set_rgb(&mut self, red: i64, green: i64, blue: i64) {
        self.set_red(red);
        self.set_green(green);
        self.set_blue(blue);
    }

    pub fn set_red(&mut self, red: i64) {
        self.color.red = clamp_channel(red);
    }

    pub fn set_green(&mut self, green: i64) {
        self.color.green = clamp_channel(green);
    }

    pub fn set_blue(&mut self, blue: i64) {
        self.color.blue = clamp_channel(blue);
    }
}

static TABLE: TransitionTable = TransitionTable::new(
    &[RgbLight::OFF, RgbLight::ON],
    &[
        Transition::new(RgbLight::OFF, RgbLight::TURN_ON, RgbLight::ON),
        Transition::new(RgbLight::ON, RgbLight::TURN_OFF, RgbLight::OFF),
    ],
);

impl Appliance for RgbLight {
    type Update = RgbLightDto;

    const KIND: DeviceKind = DeviceKind::RgbLight;

    fn label(&self) -> &Label {
        self.actuator.label()
    }

    fn is_enabled(&self) -> bool {
        self.actuator.is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.actuator.set_enabled(enabled);
    }

    fn status(&self) -> Option<&'static str> {
        Some(self.actuator.status())
    }

    fn validate(&self, update: &RgbLightDto) -> Result<(), ValidationError> {
        self.actuator
            .validate_status(Self::KIND, update.status.as_deref())
    }

    fn apply_unchecked(&mut self, update: &RgbLightDto) {
        if let Some(red) = update.red {
            self.set_red(red);
        }
        if let Some(green) = update.green {
            self.set_green(green);
        }
        if let Some(blue) = update.blue {
            self.set_blue(blue);
        }
        self.actuator
            .apply_unchecked(update.enabled, update.status.as_deref());
    }

    fn create_with_same_attributes(&self, label: Label) -> Self {
        Self {
            actuator: self.actuator.relabel(label),
            color: self.color,
        }
    }

    fn has_same_attributes(&self, other: &Self) -> bool {
        self.actuator.has_same_attributes(&other.actuator) && self.color == other.color
    }
}
