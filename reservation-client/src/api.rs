//! Typed reservation API
//!
//! The forms talk to the server through [`ReservationApi`] so they can be
//! driven by a fake in tests.

use async_trait::async_trait;
use shared::models::{
    Reservation, ReservationDraft, ReservationStatus, SeatDraft, StatusUpdate, Table, TableDraft,
};
use tokio_util::sync::CancellationToken;

use crate::{ClientResult, HttpClient};

#[async_trait]
pub trait ReservationApi: Send + Sync {
    async fn list_tables(&self, signal: &CancellationToken) -> ClientResult<Vec<Table>>;

    async fn create_table(
        &self,
        table: &TableDraft,
        signal: &CancellationToken,
    ) -> ClientResult<Table>;

    async fn seat_table(
        &self,
        table_id: i64,
        seat: &SeatDraft,
        signal: &CancellationToken,
    ) -> ClientResult<Table>;

    async fn finish_table(&self, table_id: i64, signal: &CancellationToken) -> ClientResult<Table>;

    async fn list_reservations(
        &self,
        date: &str,
        signal: &CancellationToken,
    ) -> ClientResult<Vec<Reservation>>;

    async fn search_reservations(
        &self,
        mobile_number: &str,
        signal: &CancellationToken,
    ) -> ClientResult<Vec<Reservation>>;

    async fn get_reservation(
        &self,
        reservation_id: i64,
        signal: &CancellationToken,
    ) -> ClientResult<Reservation>;

    async fn create_reservation(
        &self,
        reservation: &ReservationDraft,
        signal: &CancellationToken,
    ) -> ClientResult<Reservation>;

    async fn update_reservation(
        &self,
        reservation_id: i64,
        reservation: &ReservationDraft,
        signal: &CancellationToken,
    ) -> ClientResult<Reservation>;

    async fn update_status(
        &self,
        reservation_id: i64,
        status: ReservationStatus,
        signal: &CancellationToken,
    ) -> ClientResult<ReservationStatus>;
}

#[async_trait]
impl ReservationApi for HttpClient {
    async fn list_tables(&self, signal: &CancellationToken) -> ClientResult<Vec<Table>> {
        self.get("/tables", signal).await
    }

    async fn create_table(
        &self,
        table: &TableDraft,
        signal: &CancellationToken,
    ) -> ClientResult<Table> {
        self.post("/tables", table, signal).await
    }

    async fn seat_table(
        &self,
        table_id: i64,
        seat: &SeatDraft,
        signal: &CancellationToken,
    ) -> ClientResult<Table> {
        self.put(&format!("/tables/{table_id}/seat"), seat, signal)
            .await
    }

    async fn finish_table(&self, table_id: i64, signal: &CancellationToken) -> ClientResult<Table> {
        self.delete(&format!("/tables/{table_id}/seat"), signal)
            .await
    }

    async fn list_reservations(
        &self,
        date: &str,
        signal: &CancellationToken,
    ) -> ClientResult<Vec<Reservation>> {
        self.get_with_query("/reservations", &[("date", date)], signal)
            .await
    }

    async fn search_reservations(
        &self,
        mobile_number: &str,
        signal: &CancellationToken,
    ) -> ClientResult<Vec<Reservation>> {
        self.get_with_query("/reservations", &[("mobile_number", mobile_number)], signal)
            .await
    }

    async fn get_reservation(
        &self,
        reservation_id: i64,
        signal: &CancellationToken,
    ) -> ClientResult<Reservation> {
        self.get(&format!("/reservations/{reservation_id}"), signal)
            .await
    }

    async fn create_reservation(
        &self,
        reservation: &ReservationDraft,
        signal: &CancellationToken,
    ) -> ClientResult<Reservation> {
        self.post("/reservations", reservation, signal).await
    }

    async fn update_reservation(
        &self,
        reservation_id: i64,
        reservation: &ReservationDraft,
        signal: &CancellationToken,
    ) -> ClientResult<Reservation> {
        self.put(&format!("/reservations/{reservation_id}"), reservation, signal)
            .await
    }

    async fn update_status(
        &self,
        reservation_id: i64,
        status: ReservationStatus,
        signal: &CancellationToken,
    ) -> ClientResult<ReservationStatus> {
        let body = serde_json::json!({ "status": status });
        let update: StatusUpdate = self
            .put(&format!("/reservations/{reservation_id}/status"), body, signal)
            .await?;
        Ok(update.status)
    }
}
