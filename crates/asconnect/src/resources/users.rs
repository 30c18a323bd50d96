//! Users and user invitations endpoints

use super::Resource;
use crate::{
    client::Client,
    error::Result,
    types::{
        GetUserQuery, ListUserInvitationsQuery, ListUsersQuery, UserInvitationCreateRequest,
        UserInvitationResponse, UserInvitationsResponse, UserResponse, UserUpdateAttributes,
        UserUpdateRequest, UsersResponse,
    },
};

/// Users resource.
#[derive(Debug, Clone)]
pub struct Users {
    client: Client,
}

impl Users {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// `GET /v1/users`
    pub async fn list(&self, query: &ListUsersQuery) -> Result<UsersResponse> {
        self.client.get_with_query("v1/users", query).await
    }

    /// `GET /v1/users/{id}`
    pub async fn get(&self, id: &str, query: &GetUserQuery) -> Result<UserResponse> {
        self.client
            .get_with_query(&format!("v1/users/{}", id), query)
            .await
    }

    /// `PATCH /v1/users/{id}`
    pub async fn update(&self, id: &str, attributes: UserUpdateAttributes) -> Result<UserResponse> {
        let body = UserUpdateRequest::update("users", id, attributes);
        self.client.patch(&format!("v1/users/{}", id), &body).await
    }

    /// `DELETE /v1/users/{id}`
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("v1/users/{}", id)).await
    }

    /// `GET /v1/userInvitations`
    pub async fn list_invitations(
        &self,
        query: &ListUserInvitationsQuery,
    ) -> Result<UserInvitationsResponse> {
        self.client.get_with_query("v1/userInvitations", query).await
    }

    /// `GET /v1/userInvitations/{id}`
    pub async fn get_invitation(&self, id: &str) -> Result<UserInvitationResponse> {
        self.client
            .get(&format!("v1/userInvitations/{}", id))
            .await
    }

    /// `POST /v1/userInvitations`
    pub async fn invite(&self, body: &UserInvitationCreateRequest) -> Result<UserInvitationResponse> {
        self.client.post("v1/userInvitations", body).await
    }

    /// `DELETE /v1/userInvitations/{id}`
    pub async fn cancel_invitation(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("v1/userInvitations/{}", id))
            .await
    }
}

impl Resource for Users {
    fn client(&self) -> &Client {
        &self.client
    }
}
