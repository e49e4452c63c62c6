//! Signer recovery for typed data and personal messages.

use alloy_primitives::{eip191_hash_message, Address, Signature};

use crate::typed_data::TypedDataRequest;
use crate::Result;

/// Recover the address that produced `signature` over `request`.
pub fn recover_typed_data_address(request: &TypedDataRequest, signature: &[u8]) -> Result<Address> {
    let digest = request.signing_hash()?;
    let signature = Signature::from_raw(signature)?;
    Ok(signature.recover_address_from_prehash(&digest)?)
}

/// Check whether `signature` over `request` was produced by `address`.
pub fn verify_typed_data(
    address: Address,
    request: &TypedDataRequest,
    signature: &[u8],
) -> Result<bool> {
    Ok(recover_typed_data_address(request, signature)? == address)
}

/// Recover the signer of an EIP-191 personal message.
pub fn recover_message_address(message: &[u8], signature: &[u8]) -> Result<Address> {
    let digest = eip191_hash_message(message);
    let signature = Signature::from_raw(signature)?;
    Ok(signature.recover_address_from_prehash(&digest)?)
}
