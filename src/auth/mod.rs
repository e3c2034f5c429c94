//! Device authorization: key material, sessions and poll outcomes.

pub mod device_code;
pub mod keys;

pub use device_code::{
    DeviceCodeSession, DevicePoll, DevicePollResponse, DeviceStartRequest, DeviceStartResponse,
};
pub use keys::DeviceKeyPair;
