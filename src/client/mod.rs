//! Cliente HTTP del dashboard
//!
//! Este módulo consume la API REST del concesionario con credenciales HTTP
//! Basic tomadas de una `AuthSession` explícita. Un 401 vacía la sesión; el
//! resto de errores llevan el `detail` del servidor tal cual.

pub mod error;
pub mod session;
pub mod snapshot;

use std::collections::BTreeMap;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::dto::client_dto::{ClientFilters, CreateClientRequest, UpdateClientRequest};
use crate::dto::common::Pagination;
use crate::dto::sale_dto::CreateSaleRequest;
use crate::dto::vehicle_dto::{
    ChangeStatusRequest, CreateVehicleRequest, TransitionsResponse, UpdateVehicleRequest,
    VehicleFilters,
};
use crate::models::{
    Client as ClientRecord, HealthInfo, Insights, QuarterlyAggregate, Sale, UserInfo, Vehicle,
    VehicleStatus,
};

pub use error::ClientError;
pub use session::{AuthSession, SharedSession};
pub use snapshot::{DashboardSnapshot, DashboardViews};

const USER_AGENT: &str = concat!("aura-drive-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Cliente de la API del concesionario
#[derive(Clone)]
pub struct DashboardClient {
    http: Client,
    base_url: String,
    session: SharedSession,
}

impl DashboardClient {
    pub fn new(base_url: &str, session: SharedSession) -> Result<Self, ClientError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Validar credenciales contra `/api/auth/me` y guardarlas en la sesión
    pub async fn login(&self, username: &str, password: &str) -> Result<UserInfo, ClientError> {
        let request = self
            .http
            .get(self.url("/api/auth/me"))
            .basic_auth(username, Some(password));
        let response = request.send().await?;
        let user: UserInfo = self.decode(response).await?;

        self.session.write().await.establish(username, password, user.clone());
        debug!("🔑 Sesión iniciada como {}", user.username);
        Ok(user)
    }

    pub async fn logout(&self) {
        self.session.write().await.clear();
    }

    async fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let header = self.session.read().await.authorization_header()?;
        Ok(builder.header(reqwest::header::AUTHORIZATION, header))
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = self.authorized(builder).await?.send().await?;
        self.decode(response).await
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        let response = self.authorized(builder).await?.send().await?;
        self.check(response).await.map(|_| ())
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ClientError> {
        let response = self.check(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Traducir una respuesta de error a `ClientError`
    async fn check(&self, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => {
                warn!("🔒 Credenciales rechazadas, cerrando sesión");
                self.session.write().await.clear();
                Err(ClientError::Unauthorized(detail))
            }
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden(detail)),
            _ => Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            }),
        }
    }

    pub async fn me(&self) -> Result<UserInfo, ClientError> {
        self.send(self.http.get(self.url("/api/auth/me"))).await
    }

    pub async fn list_vehicles(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, ClientError> {
        self.send(self.http.get(self.url("/api/vehicles/")).query(filters)).await
    }

    pub async fn get_vehicle(&self, id: i64) -> Result<Vehicle, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/vehicles/{}", id)))).await
    }

    pub async fn create_vehicle(&self, request: &CreateVehicleRequest) -> Result<Vehicle, ClientError> {
        self.send(self.http.post(self.url("/api/vehicles/")).json(request)).await
    }

    pub async fn update_vehicle(
        &self,
        id: i64,
        request: &UpdateVehicleRequest,
    ) -> Result<Vehicle, ClientError> {
        self.send(self.http.put(self.url(&format!("/api/vehicles/{}", id))).json(request))
            .await
    }

    /// Enviar un cambio de estado sin comprobar la tabla localmente
    ///
    /// El flujo del dashboard pasa por `DashboardSnapshot::change_status`,
    /// que solo ofrece los destinos permitidos.
    pub async fn set_vehicle_status(&self, id: i64, status: VehicleStatus) -> Result<Vehicle, ClientError> {
        self.send(
            self.http
                .patch(self.url(&format!("/api/vehicles/{}/status", id)))
                .json(&ChangeStatusRequest { status }),
        )
        .await
    }

    pub async fn vehicle_transitions(&self, id: i64) -> Result<TransitionsResponse, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/vehicles/{}/transitions", id))))
            .await
    }

    pub async fn delete_vehicle(&self, id: i64) -> Result<(), ClientError> {
        self.send_empty(self.http.delete(self.url(&format!("/api/vehicles/{}", id))))
            .await
    }

    pub async fn list_clients(&self, filters: &ClientFilters) -> Result<Vec<ClientRecord>, ClientError> {
        self.send(self.http.get(self.url("/api/clients/")).query(filters)).await
    }

    pub async fn get_client(&self, id: i64) -> Result<ClientRecord, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/clients/{}", id)))).await
    }

    pub async fn create_client(&self, request: &CreateClientRequest) -> Result<ClientRecord, ClientError> {
        self.send(self.http.post(self.url("/api/clients/")).json(request)).await
    }

    pub async fn update_client(
        &self,
        id: i64,
        request: &UpdateClientRequest,
    ) -> Result<ClientRecord, ClientError> {
        self.send(self.http.put(self.url(&format!("/api/clients/{}", id))).json(request))
            .await
    }

    pub async fn delete_client(&self, id: i64) -> Result<(), ClientError> {
        self.send_empty(self.http.delete(self.url(&format!("/api/clients/{}", id))))
            .await
    }

    pub async fn list_sales(&self, page: Pagination) -> Result<Vec<Sale>, ClientError> {
        self.send(self.http.get(self.url("/api/sales/")).query(&page)).await
    }

    pub async fn create_sale(&self, request: &CreateSaleRequest) -> Result<Sale, ClientError> {
        self.send(self.http.post(self.url("/api/sales/")).json(request)).await
    }

    pub async fn quarterly(&self) -> Result<Vec<QuarterlyAggregate>, ClientError> {
        self.send(self.http.get(self.url("/api/analytics/quarterly"))).await
    }

    pub async fn insights(&self) -> Result<Insights, ClientError> {
        self.send(self.http.get(self.url("/api/analytics/insights"))).await
    }

    pub async fn health(&self) -> Result<HealthInfo, ClientError> {
        self.send(self.http.get(self.url("/api/system/health"))).await
    }

    pub async fn spec_catalog(&self) -> Result<BTreeMap<String, Vec<String>>, ClientError> {
        self.send(self.http.get(self.url("/api/specs/catalog"))).await
    }
}
