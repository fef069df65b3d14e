use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    /// The mail could not be handed to the transport.
    ///
    /// Only logged: notifications are best-effort and never fail the request.
    #[error("Failed to send mail '{subject}': {reason}")]
    Delivery {
        /// Subject of the undelivered mail
        subject: String,
        /// Transport failure description
        reason: String,
    },
}
