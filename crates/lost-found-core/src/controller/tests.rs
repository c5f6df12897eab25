//! Controller Tests
//!
//! Drives `BoardController` against `MemoryStorage`, a scripted email gateway
//! and a view that records every call.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::controller::BoardController;
    use crate::domain::{ContactDraft, ContactForm, ContactMessage, DomainError, DomainResult, Item, ItemId, ItemPatch, ItemType};
    use crate::gateway::{EmailGateway, MemoryStorage, RelayEmailGateway, SendReport, StorageFault, TemplateParams, EmailRelay};
    use crate::mailto::MailtoFallback;
    use crate::stats::BoardStats;
    use crate::view::{BoardView, ModalKind, Notice, NoticeLevel};

    // ========================
    // Fakes
    // ========================

    #[derive(Debug, Clone, PartialEq)]
    enum ViewEvent {
        Loading(bool),
        List(Vec<ItemId>),
        LoadError(String),
        Removed(ItemId),
        Stats(BoardStats, usize),
        Modal(ModalKind),
        Draft(ContactDraft),
        FormReset,
        Sending(bool),
        Deleting(bool),
        Notice(Notice),
        Confirm,
        Fallback(String),
        FallbackDismissed,
    }

    struct RecordingView {
        events: RefCell<Vec<ViewEvent>>,
        confirm_answer: Cell<bool>,
    }

    impl RecordingView {
        fn new() -> Self {
            Self { events: RefCell::new(Vec::new()), confirm_answer: Cell::new(true) }
        }

        fn push(&self, event: ViewEvent) {
            self.events.borrow_mut().push(event);
        }

        fn events(&self) -> Vec<ViewEvent> {
            self.events.borrow().clone()
        }

        fn notices(&self) -> Vec<Notice> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    ViewEvent::Notice(n) => Some(n),
                    _ => None,
                })
                .collect()
        }

        fn last_list(&self) -> Option<Vec<ItemId>> {
            self.events().into_iter().rev().find_map(|e| match e {
                ViewEvent::List(ids) => Some(ids),
                _ => None,
            })
        }

        fn last_stats(&self) -> Option<(BoardStats, usize)> {
            self.events().into_iter().rev().find_map(|e| match e {
                ViewEvent::Stats(stats, shown) => Some((stats, shown)),
                _ => None,
            })
        }

        fn clear(&self) {
            self.events.borrow_mut().clear();
        }
    }

    impl BoardView for RecordingView {
        fn set_loading(&self, loading: bool) {
            self.push(ViewEvent::Loading(loading));
        }
        fn set_item_list(&self, items: &[Item]) {
            self.push(ViewEvent::List(items.iter().map(|i| i.id.clone()).collect()));
        }
        fn show_load_error(&self, message: &str) {
            self.push(ViewEvent::LoadError(message.to_string()));
        }
        fn remove_item(&self, id: &ItemId) {
            self.push(ViewEvent::Removed(id.clone()));
        }
        fn set_stats(&self, stats: &BoardStats, shown: usize) {
            self.push(ViewEvent::Stats(*stats, shown));
        }
        fn show_modal(&self, kind: ModalKind, _item: Option<&Item>) {
            self.push(ViewEvent::Modal(kind));
        }
        fn set_contact_draft(&self, draft: &ContactDraft) {
            self.push(ViewEvent::Draft(draft.clone()));
        }
        fn reset_contact_form(&self) {
            self.push(ViewEvent::FormReset);
        }
        fn set_sending(&self, busy: bool) {
            self.push(ViewEvent::Sending(busy));
        }
        fn set_deleting(&self, busy: bool) {
            self.push(ViewEvent::Deleting(busy));
        }
        fn notify(&self, notice: Notice) {
            self.push(ViewEvent::Notice(notice));
        }
        fn confirm(&self, _prompt: &str) -> bool {
            self.push(ViewEvent::Confirm);
            self.confirm_answer.get()
        }
        fn present_mail_fallback(&self, fallback: &MailtoFallback) {
            self.push(ViewEvent::Fallback(fallback.url.clone()));
        }
        fn dismiss_mail_fallback(&self) {
            self.push(ViewEvent::FallbackDismissed);
        }
    }

    enum EmailScript {
        Deliver,
        Refuse,
        Explode,
        /// Never answers
        Hang,
    }

    struct ScriptedEmail {
        script: EmailScript,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl ScriptedEmail {
        fn new(script: EmailScript) -> Self {
            Self { script, sent: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl EmailGateway for ScriptedEmail {
        async fn send_contact_email(&self, message: &ContactMessage) -> DomainResult<SendReport> {
            self.sent.borrow_mut().push(message.clone());
            match self.script {
                EmailScript::Deliver => Ok(SendReport::sent("Email sent successfully!")),
                EmailScript::Refuse => Ok(SendReport::failed("Relay refused")),
                EmailScript::Explode => Err(DomainError::Backend("relay threw".into())),
                EmailScript::Hang => std::future::pending().await,
            }
        }
    }

    struct NoRelay;

    #[async_trait(?Send)]
    impl EmailRelay for NoRelay {
        async fn send(&self, _params: &TemplateParams) -> Result<(), String> {
            unreachable!("unconfigured gateway never reaches the relay")
        }
    }

    // ========================
    // Fixtures
    // ========================

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn item(id: i64, item_type: ItemType, age_days: i64) -> Item {
        let mut item = Item::new(id, format!("Item {}", id), item_type, fixed_now() - Duration::days(age_days));
        item.reporter_name = format!("Reporter {}", id);
        item.reporter_email = format!("reporter{}@example.com", id);
        item
    }

    fn two_items() -> Vec<Item> {
        vec![item(1, ItemType::Lost, 0), item(2, ItemType::Found, 8)]
    }

    type Board<E> = BoardController<MemoryStorage, E, RecordingView>;

    fn board_with(storage: MemoryStorage, script: EmailScript) -> Board<ScriptedEmail> {
        BoardController::new(storage, ScriptedEmail::new(script), RecordingView::new()).with_clock(fixed_now)
    }

    fn board(items: Vec<Item>) -> Board<ScriptedEmail> {
        board_with(MemoryStorage::new(items), EmailScript::Deliver)
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            subject: "Regarding Lost Item: Item 1".into(),
            message: "I think I have it.".into(),
            sender_email: "ana@example.com".into(),
        }
    }

    // ========================
    // Loading
    // ========================

    #[tokio::test]
    async fn test_load_renders_and_summarises() {
        let board = board(two_items());
        assert!(board.load_items().await);

        let view = board.view();
        assert_eq!(view.events()[0], ViewEvent::Loading(true));
        assert_eq!(view.last_list(), Some(vec![ItemId::from(1), ItemId::from(2)]));
        assert_eq!(
            view.last_stats(),
            Some((BoardStats { total: 2, lost: 1, found: 1, recent: 1 }, 2))
        );
        assert_eq!(board.get_stats(), BoardStats { total: 2, lost: 1, found: 1, recent: 1 });
    }

    #[tokio::test]
    async fn test_load_timeout_shows_not_ready_panel() {
        let board = board_with(
            MemoryStorage::new(two_items()).with_fault(StorageFault::NeverReady),
            EmailScript::Deliver,
        );
        assert!(!board.load_items().await);

        let events = board.view().events();
        assert!(events.contains(&ViewEvent::LoadError(
            "Storage system not ready. Please refresh the page.".into()
        )));
        assert!(board.view().last_list().is_none());
        assert!(!board.storage().calls().contains(&"get_items"));
    }

    #[tokio::test]
    async fn test_load_failure_then_manual_retry() {
        let board = board_with(
            MemoryStorage::new(two_items()).with_fault(StorageFault::FailingFetch),
            EmailScript::Deliver,
        );
        assert!(!board.load_items().await);
        assert!(board.view().events().contains(&ViewEvent::LoadError(
            "Failed to load items. Please refresh the page.".into()
        )));
        assert!(board.items().is_empty());

        board.storage().clear_faults();
        assert!(board.refresh().await);
        assert_eq!(board.items().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_collection_renders_empty_list() {
        let board = board(vec![]);
        assert!(board.load_items().await);
        assert_eq!(board.view().last_list(), Some(vec![]));
        assert_eq!(board.view().last_stats(), Some((BoardStats::default(), 0)));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_collapsed() {
        let mut dup = item(1, ItemType::Found, 3);
        dup.title = "Shadow copy".into();
        let board = board(vec![item(1, ItemType::Lost, 0), dup, item(2, ItemType::Found, 1)]);
        board.load_items().await;

        let items = board.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Item 1");
        let mut ids: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    // ========================
    // Modals
    // ========================

    #[tokio::test]
    async fn test_contact_owner_without_selection_is_noop() {
        let board = board(two_items());
        board.load_items().await;
        board.view().clear();

        board.contact_owner();

        assert_eq!(board.modal(), ModalKind::Closed);
        assert!(board.view().events().is_empty());
    }

    #[tokio::test]
    async fn test_contact_owner_prefills_draft() {
        let board = board(two_items());
        board.load_items().await;
        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.contact_owner();

        assert_eq!(board.modal(), ModalKind::ContactOpen);
        let events = board.view().events();
        assert!(events.contains(&ViewEvent::Draft(ContactDraft {
            subject: "Regarding Lost Item: Item 1".into(),
            message: "Hi Reporter 1,\n\nI saw your listing about the Item 1. ".into(),
        })));
        assert_eq!(events.last(), Some(&ViewEvent::Modal(ModalKind::ContactOpen)));
    }

    #[tokio::test]
    async fn test_close_and_escape() {
        let board = board(two_items());
        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.show_item_modal(item(2, ItemType::Found, 8));
        assert_eq!(board.selected().map(|i| i.id), Some(ItemId::from(2)));

        board.close_modal();
        assert_eq!(board.modal(), ModalKind::Closed);
        assert!(board.selected().is_none());

        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.contact_owner();
        board.handle_escape();
        assert_eq!(board.modal(), ModalKind::Closed);
        assert!(board.selected().is_none());
    }

    #[tokio::test]
    async fn test_escape_dismisses_mail_fallback() {
        let board = board(two_items());
        board.handle_escape();
        assert_eq!(board.view().events(), vec![ViewEvent::FallbackDismissed]);
        assert_eq!(board.modal(), ModalKind::Closed);
    }

    #[tokio::test]
    async fn test_backdrop_click_closes_matching_modal() {
        let board = board(two_items());
        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.handle_backdrop_click(ModalKind::ContactOpen);
        assert_eq!(board.modal(), ModalKind::ItemOpen);
        board.handle_backdrop_click(ModalKind::ItemOpen);
        assert_eq!(board.modal(), ModalKind::Closed);
    }

    // ========================
    // Contact form
    // ========================

    #[tokio::test]
    async fn test_empty_message_never_reaches_gateway() {
        let board = board(two_items());
        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.contact_owner();

        let form = ContactForm { message: String::new(), ..filled_form() };
        assert!(!board.handle_contact_submit(form).await);

        assert!(board.email_sent().is_empty());
        assert_eq!(board.view().notices(), vec![Notice::error("Please fill in all fields")]);
        assert_eq!(board.modal(), ModalKind::ContactOpen);
    }

    #[tokio::test]
    async fn test_submit_without_selection() {
        let board = board(two_items());
        assert!(!board.handle_contact_submit(filled_form()).await);
        assert!(board.email_sent().is_empty());
        assert_eq!(board.view().notices(), vec![Notice::error("No item selected")]);
    }

    #[tokio::test]
    async fn test_successful_submit_closes_and_resets() {
        let board = board(two_items());
        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.contact_owner();

        assert!(board.handle_contact_submit(filled_form()).await);

        let sent = board.email_sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient_email, "reporter1@example.com");
        assert_eq!(sent[0].sender_name.as_deref(), Some("ana"));
        assert_eq!(sent[0].item_type, "Lost");

        let events = board.view().events();
        assert!(events.contains(&ViewEvent::FormReset));
        assert_eq!(events.iter().filter(|e| **e == ViewEvent::Sending(true)).count(), 1);
        assert_eq!(events.last(), Some(&ViewEvent::Sending(false)));
        assert_eq!(board.modal(), ModalKind::Closed);
        assert_eq!(board.view().notices(), vec![Notice::success("Email sent successfully!")]);
    }

    #[tokio::test]
    async fn test_refused_submit_keeps_modal_open() {
        let board = board_with(MemoryStorage::new(two_items()), EmailScript::Refuse);
        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.contact_owner();

        assert!(!board.handle_contact_submit(filled_form()).await);

        assert_eq!(board.modal(), ModalKind::ContactOpen);
        assert_eq!(board.view().notices(), vec![Notice::error("Relay refused")]);
        assert_eq!(board.view().events().last(), Some(&ViewEvent::Sending(false)));
        assert!(!board.view().events().contains(&ViewEvent::FormReset));
    }

    #[tokio::test]
    async fn test_gateway_error_reenables_submit() {
        let board = board_with(MemoryStorage::new(two_items()), EmailScript::Explode);
        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.contact_owner();

        assert!(!board.handle_contact_submit(filled_form()).await);

        let events = board.view().events();
        let sending: Vec<_> = events.iter().filter(|e| matches!(e, ViewEvent::Sending(_))).collect();
        assert_eq!(sending, vec![&ViewEvent::Sending(true), &ViewEvent::Sending(false)]);
        assert_eq!(
            board.view().notices(),
            vec![Notice::error("Failed to send message. Please try again.")]
        );
    }

    #[tokio::test]
    async fn test_unconfigured_email_presents_fallback() {
        let board = BoardController::new(
            MemoryStorage::new(two_items()),
            RelayEmailGateway::<NoRelay>::unconfigured(),
            RecordingView::new(),
        );
        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.contact_owner();

        assert!(board.handle_contact_submit(filled_form()).await);

        let fallback = board.view().events().into_iter().find_map(|e| match e {
            ViewEvent::Fallback(url) => Some(url),
            _ => None,
        });
        let url = fallback.expect("fallback presented");
        assert!(url.starts_with("mailto:reporter1@example.com?subject=Regarding%20Lost%20Item%3A%20Item%201"));
        assert!(url.contains("&body=From%3A%20ana%40example.com%0A%0AI%20think%20I%20have%20it."));
        assert_eq!(board.view().notices(), vec![Notice::success("Contact options displayed")]);
    }

    #[tokio::test]
    async fn test_abandoned_submit_reenables_control() {
        let board = board_with(MemoryStorage::new(two_items()), EmailScript::Hang);
        board.show_item_modal(item(1, ItemType::Lost, 0));
        board.contact_owner();
        board.view().clear();

        tokio::select! {
            biased;
            _ = board.handle_contact_submit(filled_form()) => panic!("send should still be pending"),
            _ = std::future::ready(()) => {}
        }

        assert_eq!(board.email_sent().len(), 1);
        assert_eq!(
            board.view().events(),
            vec![ViewEvent::Sending(true), ViewEvent::Sending(false)]
        );
        assert_eq!(board.modal(), ModalKind::ContactOpen);
    }

    // ========================
    // Delete
    // ========================

    #[tokio::test]
    async fn test_confirmed_delete_is_verified() {
        let board = board(two_items());
        board.load_items().await;
        board.show_item_modal(board.items()[0].clone());
        board.view().clear();

        assert!(board.delete_item().await);

        assert_eq!(board.items().len(), 1);
        assert_eq!(board.view().last_list(), Some(vec![ItemId::from(2)]));
        let events = board.view().events();
        assert!(events.contains(&ViewEvent::Removed(ItemId::from(1))));
        assert!(events.contains(&ViewEvent::Modal(ModalKind::Closed)));
        assert_eq!(events.last(), Some(&ViewEvent::Deleting(false)));

        let notices = board.view().notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert!(notices[0].text.contains("(1 item(s) removed)"));
    }

    #[tokio::test]
    async fn test_cancelled_delete_does_nothing() {
        let board = board(two_items());
        board.load_items().await;
        board.show_item_modal(board.items()[0].clone());
        board.view().confirm_answer.set(false);

        assert!(!board.delete_item().await);

        assert!(!board.storage().calls().contains(&"delete_item"));
        assert_eq!(board.items().len(), 2);
        assert_eq!(board.modal(), ModalKind::ItemOpen);
        assert!(board.view().notices().is_empty());
    }

    #[tokio::test]
    async fn test_delete_without_selection_skips_prompt() {
        let board = board(two_items());
        assert!(!board.delete_item().await);
        assert!(!board.view().events().contains(&ViewEvent::Confirm));
    }

    #[tokio::test]
    async fn test_item_surviving_delete_is_critical() {
        let board = board_with(
            MemoryStorage::new(two_items()).with_fault(StorageFault::StaleDelete),
            EmailScript::Deliver,
        );
        board.load_items().await;
        board.show_item_modal(board.items()[0].clone());

        assert!(!board.delete_item().await);

        let notices = board.view().notices();
        assert_eq!(
            notices,
            vec![Notice::critical("CRITICAL ERROR: Item still exists after deletion. Please check the database.")]
        );
        assert_eq!(board.items().len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_delete_is_critical_not_plain_failure() {
        let board = board_with(
            MemoryStorage::new(two_items()).with_fault(StorageFault::RejectDelete),
            EmailScript::Deliver,
        );
        board.load_items().await;
        board.show_item_modal(board.items()[0].clone());

        assert!(!board.delete_item().await);

        let notices = board.view().notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Critical);
        assert_eq!(board.items().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_of_missing_item_is_plain_failure() {
        let board = board(two_items());
        board.show_item_modal(item(9, ItemType::Lost, 0));

        assert!(!board.delete_item().await);

        assert_eq!(
            board.view().notices(),
            vec![Notice::error("Failed to delete item. The item may still exist in the database.")]
        );
        assert_eq!(board.view().events().last(), Some(&ViewEvent::Deleting(false)));
    }

    #[tokio::test]
    async fn test_delete_with_failed_reload_is_unconfirmed() {
        let board = board(two_items());
        board.load_items().await;
        board.show_item_modal(board.items()[0].clone());
        board.storage().inject(StorageFault::FailingFetchOnce);
        board.view().clear();

        assert!(!board.delete_item().await);

        assert_eq!(board.storage().snapshot().len(), 1);
        let events = board.view().events();
        assert!(events.contains(&ViewEvent::Removed(ItemId::from(1))));
        assert!(events.contains(&ViewEvent::LoadError(
            "Failed to load items. Please refresh the page.".into()
        )));
        assert_eq!(
            board.view().notices(),
            vec![Notice::error(
                "\"Item 1\" was deleted but the list could not be refreshed to confirm it."
            )]
        );
        assert_eq!(events.last(), Some(&ViewEvent::Deleting(false)));

        // the fault was one-shot
        assert!(board.refresh().await);
        assert_eq!(board.items().len(), 1);
    }

    // ========================
    // Update
    // ========================

    #[tokio::test]
    async fn test_update_is_verified_after_reload() {
        let board = board(two_items());
        board.load_items().await;
        board.show_item_modal(board.items()[0].clone());

        let patch = ItemPatch { title: Some("Item 1 (UPDATED)".into()), ..Default::default() };
        assert!(board.update_item(patch).await);

        assert_eq!(board.items()[0].title, "Item 1 (UPDATED)");
        assert_eq!(
            board.view().notices(),
            vec![Notice::success("\"Item 1 (UPDATED)\" has been updated.")]
        );
    }

    #[tokio::test]
    async fn test_ignored_update_is_critical() {
        let board = board_with(
            MemoryStorage::new(two_items()).with_fault(StorageFault::IgnoreUpdates),
            EmailScript::Deliver,
        );
        board.load_items().await;
        board.show_item_modal(board.items()[0].clone());

        let patch = ItemPatch { location: Some("Front desk".into()), ..Default::default() };
        assert!(!board.update_item(patch).await);

        assert_eq!(
            board.view().notices(),
            vec![Notice::critical("CRITICAL ERROR: Update was not saved. Please check the database.")]
        );
    }

    #[tokio::test]
    async fn test_update_of_unknown_item_is_plain_failure() {
        let board = board(two_items());
        board.load_items().await;
        board.show_item_modal(item(9, ItemType::Lost, 0));
        board.view().clear();

        let patch = ItemPatch { title: Some("Ghost".into()), ..Default::default() };
        assert!(!board.update_item(patch).await);

        assert_eq!(board.view().notices(), vec![Notice::error("Failed to update item.")]);
        assert_eq!(board.modal(), ModalKind::ItemOpen);
        assert_eq!(board.storage().calls().iter().filter(|c| **c == "get_items").count(), 1);
    }

    #[tokio::test]
    async fn test_update_backend_error_is_plain_failure() {
        let board = board_with(
            MemoryStorage::new(two_items()).with_fault(StorageFault::FailingUpdate),
            EmailScript::Deliver,
        );
        board.load_items().await;
        board.show_item_modal(board.items()[0].clone());

        let patch = ItemPatch { title: Some("Item 1 (UPDATED)".into()), ..Default::default() };
        assert!(!board.update_item(patch).await);

        let notices = board.view().notices();
        assert_eq!(notices, vec![Notice::error("Failed to update item.")]);
        assert_eq!(board.items()[0].title, "Item 1");
        assert_eq!(board.modal(), ModalKind::ItemOpen);
    }

    #[tokio::test]
    async fn test_empty_patch_is_rejected_locally() {
        let board = board(two_items());
        board.show_item_modal(item(1, ItemType::Lost, 0));
        assert!(!board.update_item(ItemPatch::default()).await);
        assert!(!board.storage().calls().contains(&"update_item"));
    }

    impl Board<ScriptedEmail> {
        fn email_sent(&self) -> Vec<ContactMessage> {
            self.email.sent.borrow().clone()
        }
    }
}
