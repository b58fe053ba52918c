use crate::artifact::{Artifact, ArtifactError};

use ethers_contract::{Contract, ContractDeployer, ContractError, ContractFactory};
use ethers_core::{abi::Tokenize, types::Address};
use ethers_providers::Middleware;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while preparing a deployment
#[derive(Error, Debug)]
pub enum DeployError<M: Middleware> {
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Contract(#[from] ContractError<M>),
}

/// A generated binding together with the artifact it was generated from.
///
/// Implemented for every contract in this crate, this is what ties the
/// `abigen!` output to the embedded bytecode.
pub trait BoundContract<M: Middleware>: From<Contract<M>> + Sized {
    /// The artifact this binding was generated from
    fn artifact() -> &'static Artifact;

    /// Returns a deployer that sends the embedded creation bytecode together with the ABI
    /// encoded `constructor_args`. Pass `()` for contracts without constructor arguments.
    ///
    /// Fails with [`ArtifactError::MissingBytecode`] for interfaces and abstract contracts.
    ///
    /// ```no_run
    /// # use ocr_contracts::{ocr2::ocr2_title_request::OCR2TitleRequest, BoundContract};
    /// # async fn deploy<M: ethers_providers::Middleware>(client: std::sync::Arc<M>) {
    /// let contract = OCR2TitleRequest::deploy(client, ()).unwrap().legacy().send().await.unwrap();
    /// # }
    /// ```
    fn deploy<T: Tokenize>(
        client: Arc<M>,
        constructor_args: T,
    ) -> Result<ContractDeployer<M, Self>, DeployError<M>> {
        let deployer = deploy_artifact(Self::artifact(), client, constructor_args)?;
        Ok(ContractDeployer::new(deployer.deployer))
    }

    /// Binds to an already deployed instance using the artifact's ABI
    fn at(address: Address, client: Arc<M>) -> Result<Self, ArtifactError> {
        Ok(Contract::new(address, Self::artifact().abi()?, client).into())
    }
}

/// Prepares the deployment of any embedded artifact as an untyped [`Contract`].
///
/// This is the only way to deploy the artifacts that have no callable surface,
/// e.g. the OCR3 verifier libraries.
pub fn deploy_artifact<M: Middleware, T: Tokenize>(
    artifact: &Artifact,
    client: Arc<M>,
    constructor_args: T,
) -> Result<ContractDeployer<M, Contract<M>>, DeployError<M>> {
    let abi = artifact.abi()?;
    let bytecode = artifact.bytecode()?;
    tracing::debug!(
        contract = artifact.name,
        generation = %artifact.generation,
        bytecode_len = bytecode.len(),
        "preparing deployment"
    );
    let factory = ContractFactory::new(abi, bytecode, client);
    let deployer = factory.deploy(constructor_args)?;
    Ok(ContractDeployer::new(deployer))
}

/// Implements [`BoundContract`] for a generated binding
macro_rules! bound_contract {
    ($binding:ident, $artifact:ident) => {
        impl<M: ::ethers_providers::Middleware> $crate::BoundContract<M> for $binding<M> {
            fn artifact() -> &'static $crate::Artifact {
                &$artifact
            }
        }
    };
}
pub(crate) use bound_contract;
