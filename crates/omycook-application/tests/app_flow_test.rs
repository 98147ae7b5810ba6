use std::time::Duration;

use omycook_application::{AppEvent, OmycookApp};
use omycook_core::chat::{ChatRole, SendOutcome};
use omycook_core::config::AppConfig;
use omycook_core::navigation::Screen;
use omycook_core::receipt::{ScanPhase, UploadedImage};
use omycook_interaction::CANNED_REPLIES;

fn receipt() -> UploadedImage {
    UploadedImage::from_bytes("receipt.png", "image/png", b"\x89PNG\r\n\x1a\n").unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_chat_reply_arrives_after_delay() {
    let (mut app, mut events) = OmycookApp::with_canned_capabilities(AppConfig::default());
    app.navigate(Screen::Chat).await;

    let outcome = app.send_chat("중불이 어느 정도인가요?").await.unwrap();
    assert!(matches!(outcome, SendOutcome::Sent(_)));
    let chat = app.chat().unwrap();
    assert_eq!(chat.with_engine(|e| e.messages().len()).await, 2);
    assert_eq!(
        app.send_chat("하나 더").await,
        Some(SendOutcome::AwaitingReply)
    );

    tokio::time::sleep(Duration::from_millis(1499)).await;
    assert!(events.try_recv().is_err());

    let event = events.recv().await.unwrap();
    let AppEvent::ChatReplied(reply) = event else {
        panic!("unexpected event {:?}", event);
    };
    assert_eq!(reply.role, ChatRole::Assistant);
    assert!(CANNED_REPLIES.contains(&reply.content.as_str()));

    let chat = app.chat().unwrap();
    let roles: Vec<ChatRole> = chat
        .with_engine(|e| e.messages().iter().map(|m| m.role).collect())
        .await;
    assert_eq!(roles, vec![ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
    assert_eq!(app.pending_jobs(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_chat_cancels_pending_reply() {
    let (mut app, mut events) = OmycookApp::with_canned_capabilities(AppConfig::default());
    app.navigate(Screen::Chat).await;
    app.send_chat("질문").await;
    assert_eq!(app.pending_jobs(), 1);

    app.navigate(Screen::Home).await;
    tokio::time::sleep(Duration::from_millis(3000)).await;

    assert!(events.try_recv().is_err());
    assert_eq!(app.pending_jobs(), 0);

    app.navigate(Screen::Chat).await;
    let chat = app.chat().unwrap();
    assert_eq!(chat.with_engine(|e| e.messages().len()).await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_late_reply_dropped_without_cancellation() {
    let mut config = AppConfig::default();
    config.navigation.cancel_pending_on_leave = false;
    let (mut app, mut events) = OmycookApp::with_canned_capabilities(config);

    app.navigate(Screen::Chat).await;
    app.send_chat("질문").await;
    app.navigate(Screen::Trending).await;
    assert_eq!(app.pending_jobs(), 1);

    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert_eq!(app.pending_jobs(), 0);
    assert!(events.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_receipt_scan_saves_into_pantry() {
    let (mut app, mut events) = OmycookApp::with_canned_capabilities(AppConfig::default());
    app.navigate(Screen::ReceiptScan).await;

    assert_eq!(app.upload_receipt(receipt()).await, Some(true));
    let scan = app.scan().unwrap();
    assert_eq!(scan.with_scanner(|s| s.phase()).await, ScanPhase::Scanning);

    assert_eq!(events.recv().await, Some(AppEvent::ScanCompleted { item_count: 7 }));
    let scan = app.scan().unwrap();
    assert_eq!(scan.with_scanner(|s| s.phase()).await, ScanPhase::Reviewing);
    assert_eq!(scan.toggle_confirm(0).await, Some(false));

    assert_eq!(app.save_scan().await, Some(6));
    assert_eq!(app.current_screen(), Screen::Ingredients);
    assert_eq!(app.ingredients().len(), 11);
    assert_eq!(app.visible_ingredients().len(), 11);
}

#[tokio::test(start_paused = true)]
async fn test_save_disabled_with_nothing_confirmed() {
    let (mut app, mut events) = OmycookApp::with_canned_capabilities(AppConfig::default());
    app.navigate(Screen::ReceiptScan).await;
    app.upload_receipt(receipt()).await;
    events.recv().await;

    let scan = app.scan().unwrap();
    for index in 0..7 {
        scan.toggle_confirm(index).await;
    }
    assert_eq!(app.save_scan().await, None);
    assert_eq!(app.current_screen(), Screen::ReceiptScan);
    assert_eq!(app.ingredients().len(), 5);
}
