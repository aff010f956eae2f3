// reservation-client/tests/client_integration.rs
// 集成测试: 启动真实服务器 (127.0.0.1:0, 内存数据库)

use chrono::{Datelike, Duration, Local, Weekday};
use reservation_client::{
    CancellationToken, ClientConfig, ClientError, HttpClient, ReservationApi, ReservationForm,
    ReservationStatus, SeatForm, Submission, TableForm,
};
use reservation_server::{Config, Server, ServerState};
use tokio::net::TcpListener;

/// Start a server and return a client pointed at it
async fn spawn_server() -> anyhow::Result<(HttpClient, CancellationToken)> {
    let config = Config::for_tests();
    let state = ServerState::for_tests().await?;
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let shutdown = CancellationToken::new();
    let stop = shutdown.clone();
    tokio::spawn(async move {
        let server = Server::with_state(config, state);
        let _ = server
            .serve(listener, async move { stop.cancelled().await })
            .await;
    });

    let client = HttpClient::new(&ClientConfig::new(format!("http://{addr}")).with_timeout(5))?;
    Ok((client, shutdown))
}

fn open_day() -> String {
    let mut date = Local::now().date_naive() + Duration::days(2);
    while date.weekday() == Weekday::Tue {
        date += Duration::days(1);
    }
    date.to_string()
}

fn reservation_form(people: &str) -> ReservationForm {
    let mut form = ReservationForm::new();
    form.handle_change("first_name", "Rick");
    form.handle_change("last_name", "Sanchez");
    form.handle_change("mobile_number", "202-555-0164");
    form.handle_change("reservation_date", open_day());
    form.handle_change("reservation_time", "18:00");
    form.handle_change("people", people);
    form
}

#[tokio::test]
async fn test_forms_end_to_end() -> anyhow::Result<()> {
    let (client, shutdown) = spawn_server().await?;
    let signal = CancellationToken::new();

    let mut table_form = TableForm::new();
    table_form.handle_change("table_name", "A1");
    table_form.handle_change("capacity", "4");
    assert_eq!(
        table_form.submit(&client, &signal).await,
        Submission::Redirect("/dashboard".into())
    );

    let mut form = reservation_form("2");
    assert_eq!(
        form.submit(&client, &signal).await,
        Submission::Redirect(format!("/dashboard?date={}", open_day()))
    );

    let reservations = client.list_reservations(&open_day(), &signal).await?;
    assert_eq!(reservations.len(), 1);
    let reservation = &reservations[0];
    assert_eq!(reservation.people, 2);

    let tables = client.list_tables(&signal).await?;
    let mut seat_form = SeatForm::new(reservation.reservation_id);
    seat_form.handle_change("table_id", tables[0].table_id.to_string());
    assert_eq!(
        seat_form.submit(&client, &signal).await,
        Submission::Redirect("/dashboard".into())
    );

    let seated = client
        .get_reservation(reservation.reservation_id, &signal)
        .await?;
    assert_eq!(seated.status, ReservationStatus::Seated);

    let table = client.finish_table(tables[0].table_id, &signal).await?;
    assert!(table.is_free());
    let finished = client
        .get_reservation(reservation.reservation_id, &signal)
        .await?;
    assert_eq!(finished.status, ReservationStatus::Finished);

    let found = client.search_reservations("555-0164", &signal).await?;
    assert_eq!(found.len(), 1);

    shutdown.cancel();
    Ok(())
}

#[tokio::test]
async fn test_server_errors_reach_the_form() -> anyhow::Result<()> {
    let (client, shutdown) = spawn_server().await?;
    let signal = CancellationToken::new();

    let mut form = reservation_form("lots");
    assert_eq!(form.submit(&client, &signal).await, Submission::Failed);
    assert_eq!(form.error.as_deref(), Some("A 'people' property is required."));

    let mut table_form = TableForm::new();
    table_form.handle_change("table_name", "A");
    table_form.handle_change("capacity", "4");
    assert_eq!(table_form.submit(&client, &signal).await, Submission::Failed);
    assert_eq!(
        table_form.error.as_deref(),
        Some("table_name needs to be longer than one character")
    );

    let err = client.finish_table(42, &signal).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "this table (42) does not exist");

    shutdown.cancel();
    Ok(())
}

#[tokio::test]
async fn test_cancelled_request_is_aborted() -> anyhow::Result<()> {
    let (client, shutdown) = spawn_server().await?;
    let signal = CancellationToken::new();
    signal.cancel();

    let err = client.list_tables(&signal).await.unwrap_err();
    assert!(matches!(err, ClientError::Aborted));

    let mut form = reservation_form("2");
    assert_eq!(form.submit(&client, &signal).await, Submission::Aborted);
    assert!(form.error.is_none());

    let status = client
        .update_status(1, ReservationStatus::Cancelled, &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(status.status(), Some(404));

    shutdown.cancel();
    Ok(())
}
