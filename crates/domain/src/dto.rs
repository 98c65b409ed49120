//! Wire records for devices.
//!
//! A [`DeviceDto`] is a closed tagged union keyed on `deviceType`. Every
//! field but the tag is optional so the same record serves as a creation
//! body, a partial update and a response.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::device::DeviceKind;
use crate::error::ValidationError;

/// Name of the discriminant field in JSON and TOML.
pub const TAG_FIELD: &str = "deviceType";

/// Fields shared by the signal-driven devices (light, fireplace, door).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// RGB light record. Channels are signed so out-of-range input can be
/// clamped instead of rejected; integers beyond `i64` saturate on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RgbLightDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "saturating_channel",
        skip_serializing_if = "Option::is_none"
    )]
    pub red: Option<i64>,
    #[serde(
        default,
        deserialize_with = "saturating_channel",
        skip_serializing_if = "Option::is_none"
    )]
    pub green: Option<i64>,
    #[serde(
        default,
        deserialize_with = "saturating_channel",
        skip_serializing_if = "Option::is_none"
    )]
    pub blue: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermometerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Wire representation of any device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "deviceType")]
pub enum DeviceDto {
    Light(ActuatorDto),
    #[serde(rename = "RGBLight")]
    RgbLight(RgbLightDto),
    Fireplace(ActuatorDto),
    Door(ActuatorDto),
    Thermometer(ThermometerDto),
}

impl DeviceDto {
    /// Empty record of the given kind, every field absent.
    #[must_use]
    pub fn empty(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Light => Self::Light(ActuatorDto::default()),
            DeviceKind::RgbLight => Self::RgbLight(RgbLightDto::default()),
            DeviceKind::Fireplace => Self::Fireplace(ActuatorDto::default()),
            DeviceKind::Door => Self::Door(ActuatorDto::default()),
            DeviceKind::Thermometer => Self::Thermometer(ThermometerDto::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::RgbLight(_) => DeviceKind::RgbLight,
            Self::Fireplace(_) => DeviceKind::Fireplace,
            Self::Door(_) => DeviceKind::Door,
            Self::Thermometer(_) => DeviceKind::Thermometer,
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Light(dto) | Self::Fireplace(dto) | Self::Door(dto) => dto.label.as_deref(),
            Self::RgbLight(dto) => dto.label.as_deref(),
            Self::Thermometer(dto) => dto.label.as_deref(),
        }
    }

    /// Replace the label carried by the record.
    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = Some(label.into());
        match self {
            Self::Light(dto) | Self::Fireplace(dto) | Self::Door(dto) => dto.label = label,
            Self::RgbLight(dto) => dto.label = label,
            Self::Thermometer(dto) => dto.label = label,
        }
    }

    /// Decode a request body for a device of `kind`.
    ///
    /// The `deviceType` field is optional; when present it must name `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::KindMismatch`] when the body declares
    /// another kind, or [`ValidationError::MalformedBody`] when the body is
    /// not an object, carries an unknown tag, or has mistyped fields.
    pub fn from_json(kind: DeviceKind, body: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut fields) = body else {
            return Err(ValidationError::MalformedBody(
                "expected a JSON object".to_string(),
            ));
        };

        if let Some(tag) = fields.remove(TAG_FIELD) {
            let declared = tag
                .as_str()
                .and_then(DeviceKind::from_dto_tag)
                .ok_or_else(|| {
                    ValidationError::MalformedBody(format!("unknown {TAG_FIELD} {tag}"))
                })?;
            if declared != kind {
                return Err(ValidationError::KindMismatch {
                    expected: kind,
                    actual: declared,
                });
            }
        }

        let body = Value::Object(fields);
        let malformed = |err: serde_json::Error| ValidationError::MalformedBody(err.to_string());
        Ok(match kind {
            DeviceKind::Light => Self::Light(serde_json::from_value(body).map_err(malformed)?),
            DeviceKind::RgbLight => {
                Self::RgbLight(serde_json::from_value(body).map_err(malformed)?)
            }
            DeviceKind::Fireplace => {
                Self::Fireplace(serde_json::from_value(body).map_err(malformed)?)
            }
            DeviceKind::Door => Self::Door(serde_json::from_value(body).map_err(malformed)?),
            DeviceKind::Thermometer => {
                Self::Thermometer(serde_json::from_value(body).map_err(malformed)?)
            }
        })
    }
}

/// Decode an optional colour channel, saturating integers that do not fit
/// in an `i64`. Fractional numbers are rejected.
fn saturating_channel<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Channel(i64);

    struct ChannelVisitor;

    impl Visitor<'_> for ChannelVisitor {
        type Value = Channel;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer colour channel")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Channel, E> {
            Ok(Channel(value))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Channel, E> {
            Ok(Channel(i64::try_from(value).unwrap_or(i64::MAX)))
        }

        fn visit_i128<E: de::Error>(self, value: i128) -> Result<Channel, E> {
            let bound = if value < 0 { i64::MIN } else { i64::MAX };
            Ok(Channel(i64::try_from(value).unwrap_or(bound)))
        }

        fn visit_u128<E: de::Error>(self, value: u128) -> Result<Channel, E> {
            Ok(Channel(i64::try_from(value).unwrap_or(i64::MAX)))
        }

        #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Channel, E> {
            if value.fract() != 0.0 {
                return Err(E::invalid_value(de::Unexpected::Float(value), &self));
            }
            // float to int casts saturate
            Ok(Channel(value as i64))
        }
    }

    impl<'de> Deserialize<'de> for Channel {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ChannelVisitor)
        }
    }

    Ok(Option::<Channel>::deserialize(deserializer)?.map(|Channel(value)| value))
}

/// Every device of the house.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseDto {
    pub devices: Vec<DeviceDto>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_serialize_tag_and_skip_absent_fields() {
        let dto = DeviceDto::Light(ActuatorDto {
            label: Some("light1".to_string()),
            enabled: Some(true),
            status: None,
        });
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"deviceType": "Light", "label": "light1", "enabled": true})
        );
    }

    #[test]
    fn should_use_rgb_light_tag() {
        let dto = DeviceDto::empty(DeviceKind::RgbLight);
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"deviceType": "RGBLight"})
        );
    }

    #[test]
    fn should_decode_body_without_tag_using_path_kind() {
        let dto = DeviceDto::from_json(
            DeviceKind::Light,
            json!({"label": "light2", "status": "on", "enabled": true}),
        )
        .unwrap();
        assert_eq!(
            dto,
            DeviceDto::Light(ActuatorDto {
                label: Some("light2".to_string()),
                enabled: Some(true),
                status: Some("on".to_string()),
            })
        );
    }

    #[test]
    fn should_accept_body_with_matching_tag() {
        let dto = DeviceDto::from_json(
            DeviceKind::RgbLight,
            json!({"deviceType": "RGBLight", "red": 300}),
        )
        .unwrap();
        assert_eq!(dto.kind(), DeviceKind::RgbLight);
    }

    #[test]
    fn should_reject_body_when_tag_names_another_kind() {
        let result = DeviceDto::from_json(DeviceKind::Door, json!({"deviceType": "Light"}));
        assert_eq!(
            result,
            Err(ValidationError::KindMismatch {
                expected: DeviceKind::Door,
                actual: DeviceKind::Light,
            })
        );
    }

    #[test]
    fn should_reject_unknown_tag() {
        let result = DeviceDto::from_json(DeviceKind::Door, json!({"deviceType": "Toaster"}));
        assert!(matches!(result, Err(ValidationError::MalformedBody(_))));
    }

    #[test]
    fn should_saturate_channels_beyond_integer_range() {
        let dto = DeviceDto::from_json(
            DeviceKind::RgbLight,
            json!({"red": 1e20, "green": u64::MAX, "blue": -1e20}),
        )
        .unwrap();
        assert_eq!(
            dto,
            DeviceDto::RgbLight(RgbLightDto {
                red: Some(i64::MAX),
                green: Some(i64::MAX),
                blue: Some(i64::MIN),
                ..RgbLightDto::default()
            })
        );
    }

    #[test]
    fn should_saturate_channels_in_tagged_record() {
        let dto: DeviceDto = serde_json::from_str(
            r#"{"deviceType": "RGBLight", "red": 100000000000000000000, "green": 7}"#,
        )
        .unwrap();
        assert_eq!(
            dto,
            DeviceDto::RgbLight(RgbLightDto {
                red: Some(i64::MAX),
                green: Some(7),
                ..RgbLightDto::default()
            })
        );
    }

    #[test]
    fn should_reject_fractional_channel() {
        let result = DeviceDto::from_json(DeviceKind::RgbLight, json!({"red": 12.5}));
        assert!(matches!(result, Err(ValidationError::MalformedBody(_))));
    }

    #[test]
    fn should_reject_mistyped_field() {
        let result = DeviceDto::from_json(DeviceKind::Light, json!({"enabled": "yes"}));
        assert!(matches!(result, Err(ValidationError::MalformedBody(_))));
    }

    #[test]
    fn should_reject_non_object_body() {
        let result = DeviceDto::from_json(DeviceKind::Light, json!([1, 2]));
        assert!(matches!(result, Err(ValidationError::MalformedBody(_))));
    }

    #[test]
    fn should_replace_label() {
        let mut dto = DeviceDto::empty(DeviceKind::Thermometer);
        assert_eq!(dto.label(), None);
        dto.set_label("thermometer1");
        assert_eq!(dto.label(), Some("thermometer1"));
    }

    #[test]
    fn should_deserialize_tagged_record() {
        let dto: DeviceDto =
            serde_json::from_value(json!({"deviceType": "Thermometer", "unit": "F"})).unwrap();
        assert_eq!(
            dto,
            DeviceDto::Thermometer(ThermometerDto {
                unit: Some("F".to_string()),
                ..ThermometerDto::default()
            })
        );
    }
}
