/// Represents any error that may happen while talking to the ENS160.
///
/// `E` is the error type of the underlying I2C transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error<E> {
    /// The I2C transaction failed. The transport error is passed through untouched.
    #[error("I2C transport failure: {0:?}")]
    TransportFailure(E),

    /// Nothing acknowledged the device address while probing the bus.
    #[error("no device acknowledged address {address:#04x}")]
    DeviceNotFound { address: u8 },

    /// A caller supplied value is outside of its documented range.
    #[error("invalid argument")]
    InvalidArgument,

    /// The data-ready flag did not come up within the polling window.
    #[error("timed out waiting for new data")]
    Timeout,

    /// The operating mode register holds a value that is not a defined mode.
    #[error("undefined operating mode {0:#04x}")]
    InvalidMode(u8),
}
