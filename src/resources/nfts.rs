use super::{list_page, paginated, segment};
use crate::client::{FilePart, Method, NftGateClient, RequestOptions};
use crate::pagination::{FetchPage, Paginator};
use crate::types::{Nft, NftDeploy, NftMetadata, Page};
use crate::Result;

/// NFT endpoints
#[derive(Debug, Clone, Copy)]
pub struct Nfts<'a> {
    client: &'a NftGateClient,
}

impl<'a> Nfts<'a> {
    pub(crate) fn new(client: &'a NftGateClient) -> Self {
        Self { client }
    }

    /// One page of the tokens held by `address` on `chain_id`
    pub async fn list_by_address(
        &self,
        address: &str,
        chain_id: u64,
        cursor: Option<&str>,
    ) -> Result<Page<Nft>> {
        list_page(
            self.client,
            &format!("/accounts/{}/nfts", segment(address)?),
            RequestOptions::new().query("chain_id", chain_id),
            cursor,
        )
        .await
    }

    /// Every token held by `address` on `chain_id`, fetched lazily
    pub fn paginate_by_address(
        &self,
        address: impl Into<String>,
        chain_id: u64,
    ) -> Paginator<Nft, impl FetchPage<Nft>> {
        let address = address.into();
        paginated(self.client, move |client, cursor| {
            let address = address.clone();
            async move {
                client
                    .nfts()
                    .list_by_address(&address, chain_id, cursor.as_deref())
                    .await
            }
        })
    }

    /// One token
    pub async fn get(&self, chain_id: u64, contract_address: &str, token_id: &str) -> Result<Nft> {
        self.client
            .execute_as(
                Method::GET,
                &format!(
                    "/nfts/{}/{}/{}",
                    chain_id,
                    segment(contract_address)?,
                    segment(token_id)?
                ),
                RequestOptions::new(),
            )
            .await
    }

    /// Metadata document of one token
    pub async fn metadata(
        &self,
        chain_id: u64,
        contract_address: &str,
        token_id: &str,
    ) -> Result<NftMetadata> {
        self.client
            .execute_as(
                Method::GET,
                &format!(
                    "/nfts/{}/{}/{}/metadata",
                    chain_id,
                    segment(contract_address)?,
                    segment(token_id)?
                ),
                RequestOptions::new(),
            )
            .await
    }

    /// Mint a token into a collection, uploading its image in the same request
    pub async fn deploy_with_image(&self, deploy: &NftDeploy, image: FilePart) -> Result<Nft> {
        let form = deploy.to_multipart(image)?;
        self.client
            .execute_as(Method::POST, "/nfts", RequestOptions::new().multipart(form))
            .await
    }
}
