//! Device → wire record mapping.

use crate::device::{Appliance, Device};
use crate::dto::{ActuatorDto, DeviceDto, HouseDto, RgbLightDto, ThermometerDto};

fn actuator_dto(device: &impl Appliance) -> ActuatorDto {
    ActuatorDto {
        label: Some(device.label().to_string()),
        enabled: Some(device.is_enabled()),
        status: device.status().map(str::to_string),
    }
}

impl From<&Device> for DeviceDto {
    fn from(device: &Device) -> Self {
        match device {
            Device::Light(d) => Self::Light(actuator_dto(d)),
            Device::Fireplace(d) => Self::Fireplace(actuator_dto(d)),
            Device::Door(d) => Self::Door(actuator_dto(d)),
            Device::RgbLight(d) => {
                let rgb = d.rgb();
                Self::RgbLight(RgbLightDto {
                    label: Some(d.label().to_string()),
                    enabled: Some(d.is_enabled()),
                    status: d.status().map(str::to_string),
                    red: Some(i64::from(rgb.red)),
                    green: Some(i64::from(rgb.green)),
                    blue: Some(i64::from(rgb.blue)),
                })
            }
            Device::Thermometer(d) => Self::Thermometer(ThermometerDto {
                label: Some(d.label().to_string()),
                enabled: Some(d.is_enabled()),
                unit: Some(d.unit().to_string()),
            }),
        }
    }
}

impl From<Device> for DeviceDto {
    fn from(device: Device) -> Self {
        Self::from(&device)
    }
}

impl<'a> FromIterator<&'a Device> for HouseDto {
    fn from_iter<I: IntoIterator<Item = &'a Device>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().map(DeviceDto::from).collect(),
        }
    }
}

impl FromIterator<Device> for HouseDto {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        Self {
            devices: iter.into_iter().map(DeviceDto::from).collect(),
        }
    }
}
