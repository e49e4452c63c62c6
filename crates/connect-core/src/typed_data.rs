//! EIP-712 typed data requests.
//!
//! [`TypedDataRequest`] mirrors the `eth_signTypedData_v4` JSON payload. Struct
//! hashing and the final digest are computed by `alloy-dyn-abi`; this module
//! only checks the request shape and resolves which domain fields are signed.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use alloy_dyn_abi::TypedData;
use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::Eip712Domain;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Name of the domain struct type.
pub const EIP712_DOMAIN_TYPE: &str = "EIP712Domain";

/// Domain fields in the order EIP-712 encodes them, with their types.
const DOMAIN_FIELDS: [(&str, &str); 5] = [
    ("name", "string"),
    ("version", "string"),
    ("chainId", "uint256"),
    ("verifyingContract", "address"),
    ("salt", "bytes32"),
];

/// A single `{ name, type }` member of a struct type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

impl TypedField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// EIP-712 domain. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataDomain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_chain_id"
    )]
    pub chain_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifying_contract: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<B256>,
}

impl TypedDataDomain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn verifying_contract(mut self, address: Address) -> Self {
        self.verifying_contract = Some(address);
        self
    }

    pub fn salt(mut self, salt: B256) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Convert to the alloy domain type.
    pub fn to_eip712(&self) -> Eip712Domain {
        Eip712Domain::new(
            self.name.clone().map(Cow::Owned),
            self.version.clone().map(Cow::Owned),
            self.chain_id.map(U256::from),
            self.verifying_contract,
            self.salt,
        )
    }

    /// Compute the EIP-712 domain separator hash over the fields that are set.
    pub fn separator(&self) -> B256 {
        self.to_eip712().separator()
    }

    fn has_field(&self, field: &str) -> bool {
        match field {
            "name" => self.name.is_some(),
            "version" => self.version.is_some(),
            "chainId" => self.chain_id.is_some(),
            "verifyingContract" => self.verifying_contract.is_some(),
            "salt" => self.salt.is_some(),
            _ => false,
        }
    }

    /// Copy of `self` keeping only `field`.
    fn keep(&self, field: &str, into: &mut TypedDataDomain) {
        match field {
            "name" => into.name = self.name.clone(),
            "version" => into.version = self.version.clone(),
            "chainId" => into.chain_id = self.chain_id,
            "verifyingContract" => into.verifying_contract = self.verifying_contract,
            "salt" => into.salt = self.salt,
            _ => {}
        }
    }
}

/// Chain ids show up as JSON numbers, decimal strings or hex quantities.
fn deserialize_chain_id<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawChainId {
        Number(u64),
        Text(String),
    }

    let raw = Option::<RawChainId>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawChainId::Number(id)) => Ok(Some(id)),
        Some(RawChainId::Text(text)) => {
            let parsed = match text.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => text.parse(),
            };
            parsed
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid chainId \"{}\"", text)))
        }
    }
}

/// A structured signing request: domain, type definitions, primary type and
/// the message to sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataRequest {
    #[serde(default)]
    pub domain: TypedDataDomain,
    pub types: BTreeMap<String, Vec<TypedField>>,
    pub primary_type: String,
    #[serde(default)]
    pub message: Value,
}

impl TypedDataRequest {
    pub fn new(
        domain: TypedDataDomain,
        types: BTreeMap<String, Vec<TypedField>>,
        primary_type: impl Into<String>,
        message: Value,
    ) -> Self {
        Self {
            domain,
            types,
            primary_type: primary_type.into(),
            message,
        }
    }

    /// Parse an `eth_signTypedData_v4` JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Chain the request is bound to, if the domain names one.
    pub fn chain_id(&self) -> Option<u64> {
        self.domain.chain_id
    }

    /// Check that the primary type and every struct type it references exist.
    pub fn validate(&self) -> Result<()> {
        if !self.message.is_object() {
            return Err(Error::typed_data("message must be a JSON object"));
        }
        if self.primary_type == EIP712_DOMAIN_TYPE {
            return Ok(());
        }

        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([self.primary_type.as_str()]);
        while let Some(type_name) = queue.pop_front() {
            if !seen.insert(type_name) {
                continue;
            }
            let fields = self
                .types
                .get(type_name)
                .ok_or_else(|| Error::typed_data(format!("type \"{}\" is not defined", type_name)))?;
            for field in fields {
                let base = base_type(&field.ty);
                if !is_elementary(base) {
                    queue.push_back(base);
                }
            }
        }
        Ok(())
    }

    /// The domain actually signed.
    ///
    /// Without an explicit `EIP712Domain` type every set field is signed. With
    /// one, exactly the declared fields are signed; they must be known domain
    /// fields, set on the domain, typed correctly and in canonical order.
    pub fn effective_domain(&self) -> Result<TypedDataDomain> {
        let Some(declared) = self.types.get(EIP712_DOMAIN_TYPE) else {
            return Ok(self.domain.clone());
        };

        let mut domain = TypedDataDomain::default();
        let mut last_position = None;
        for field in declared {
            let position = DOMAIN_FIELDS
                .iter()
                .position(|(name, _)| *name == field.name)
                .ok_or_else(|| {
                    Error::typed_data(format!("unknown EIP712Domain field \"{}\"", field.name))
                })?;
            let (name, expected_type) = DOMAIN_FIELDS[position];

            if field.ty != expected_type {
                return Err(Error::typed_data(format!(
                    "EIP712Domain field \"{}\" must have type \"{}\", got \"{}\"",
                    name, expected_type, field.ty
                )));
            }
            if last_position.is_some_and(|last| position <= last) {
                return Err(Error::typed_data(
                    "EIP712Domain fields must follow the order name, version, chainId, verifyingContract, salt",
                ));
            }
            if !self.domain.has_field(name) {
                return Err(Error::typed_data(format!(
                    "EIP712Domain declares \"{}\" but the domain does not set it",
                    name
                )));
            }

            self.domain.keep(name, &mut domain);
            last_position = Some(position);
        }
        Ok(domain)
    }

    /// Build the alloy representation used for hashing.
    pub fn to_typed_data(&self) -> Result<TypedData> {
        self.validate()?;
        let domain = self.effective_domain()?;

        let payload = serde_json::json!({
            "types": self.types,
            "primaryType": self.primary_type,
            "domain": {},
            "message": self.message,
        });
        let mut typed: TypedData = serde_json::from_value(payload)?;
        typed.domain = domain.to_eip712();
        Ok(typed)
    }

    /// `keccak256("\x19\x01" ‖ domainSeparator ‖ hashStruct(message))`.
    pub fn signing_hash(&self) -> Result<B256> {
        Ok(self.to_typed_data()?.eip712_signing_hash()?)
    }
}

/// Strip trailing array dimensions: `Person[2][]` → `Person`.
fn base_type(ty: &str) -> &str {
    let mut base = ty;
    while base.ends_with(']') {
        match base.rfind('[') {
            Some(open) => base = &base[..open],
            None => break,
        }
    }
    base
}

fn is_elementary(ty: &str) -> bool {
    match ty {
        "address" | "bool" | "string" | "bytes" => true,
        _ => {
            if let Some(size) = ty.strip_prefix("bytes") {
                return size.parse::<u8>().is_ok_and(|n| (1..=32).contains(&n));
            }
            match ty.strip_prefix("uint").or_else(|| ty.strip_prefix("int")) {
                Some("") => true,
                Some(bits) => bits
                    .parse::<u16>()
                    .is_ok_and(|b| b % 8 == 0 && (8..=256).contains(&b)),
                None => false,
            }
        }
    }
}
