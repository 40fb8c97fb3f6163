//! # Bridge Errors
//!
//! Every failure aborts the enclosing transaction and restores the state it
//! started from. Each variant carries the argument that caused it.

use thiserror::Error;

use rubic_access::AccessError;
use rubic_config::ConfigError;
use rubic_core::{Address, Amount, Asset, CanonicalizationError};
use rubic_fees::{FeeError, LedgerError};

/// The asset-transfer collaborator refused a movement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("{holder} holds {balance} of {asset}, needs {amount}")]
    InsufficientBalance {
        asset: Asset,
        holder: Address,
        balance: Amount,
        amount: Amount,
    },

    #[error("{spender} may spend {allowance} of {token} from {owner}, needs {amount}")]
    InsufficientAllowance {
        token: Address,
        owner: Address,
        spender: Address,
        allowance: Amount,
        amount: Amount,
    },

    /// Crediting the recipient would overflow.
    #[error("balance of {holder} in {asset} would overflow")]
    Overflow { asset: Asset, holder: Address },

    /// The recipient refused the transfer.
    #[error("transfer of {asset} to {to} rejected")]
    Rejected { asset: Asset, to: Address },
}

/// The swap router reverted or under-delivered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("router reverted: {reason}")]
    Reverted { reason: String },

    #[error("swap produced {actual}, minimum was {min}")]
    InsufficientOutput { min: Amount, actual: Amount },
}

impl SwapError {
    pub fn reverted(reason: impl Into<String>) -> Self {
        Self::Reverted {
            reason: reason.into(),
        }
    }
}

/// A cross-chain request failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("router {0} is not whitelisted")]
    NotInWhitelist(Address),

    #[error("amount {amount} of {token} outside [{min}, {max}]")]
    AmountOutOfBounds {
        token: Address,
        amount: Amount,
        min: Amount,
        max: Amount,
    },

    #[error("attached native value {attached} below required fee {required}")]
    InsufficientCryptoFee { required: Amount, attached: Amount },

    /// The source token position holds the null address.
    #[error("the native asset cannot be the source token")]
    NativeSourceToken,

    /// A router tried to open a request while its own swap was running.
    #[error("a swap is in flight; nested cross-chain requests are rejected")]
    SwapInProgress,
}

/// Coarse classification of [`BridgeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AccessDenied,
    ConfigValidation,
    RequestValidation,
    ExternalFailure,
    /// Arithmetic overflow or record encoding failure.
    Internal,
}

/// Any failure of a bridge operation.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    #[error("swap through {router} failed: {source}")]
    SwapFailed {
        router: Address,
        #[source]
        source: SwapError,
    },

    #[error(transparent)]
    Fee(#[from] FeeError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("failed to encode request record: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Access(AccessError::InvalidAddress(_)) => ErrorKind::ConfigValidation,
            Self::Access(_) => ErrorKind::AccessDenied,
            Self::Config(_) => ErrorKind::ConfigValidation,
            Self::Request(_) => ErrorKind::RequestValidation,
            Self::TransferFailed(_) | Self::SwapFailed { .. } => ErrorKind::ExternalFailure,
            Self::Fee(_) | Self::Ledger(_) | Self::Canonicalization(_) => ErrorKind::Internal,
        }
    }
}
