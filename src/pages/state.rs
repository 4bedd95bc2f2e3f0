use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use chrono::{DateTime, Duration, Utc};

/// Success banners disappear this many seconds after they were raised.
pub const SUCCESS_BANNER_SECONDS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    pub shown_at: DateTime<Utc>,
}

impl Banner {
    pub fn success(text: String) -> Banner {
        Banner {
            kind: BannerKind::Success,
            text,
            shown_at: Utc::now(),
        }
    }

    pub fn error(text: String) -> Banner {
        Banner {
            kind: BannerKind::Error,
            text,
            shown_at: Utc::now(),
        }
    }

    // Error banners stay until dismissed.
    pub fn visible_at(&self, now: DateTime<Utc>) -> bool {
        match self.kind {
            BannerKind::Error => true,
            BannerKind::Success => now - self.shown_at < Duration::seconds(SUCCESS_BANNER_SECONDS),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "banner success",
            BannerKind::Error => "banner error",
        }
    }
}

#[derive(Debug)]
struct Inner<T> {
    data: T,
    loading: bool,
    banner: Option<Banner>,
    pending_delete: Option<String>,
    committed: Option<Ticket>,
}

/// What a page shows right now.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub data: T,
    pub loading: bool,
    pub banner: Option<Banner>,
    pub pending_delete: Option<String>,
}

/// Server-held state of one page, shared by every request to it.
///
/// Refreshes take a [`Ticket`] before they start and only the newest ticket
/// may commit. The lock is never held across an `.await`.
#[derive(Debug)]
pub struct ViewState<T> {
    sequence: AtomicU64,
    inner: Mutex<Inner<T>>,
}

impl<T: Default> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::new(T::default())
    }
}

impl<T> ViewState<T> {
    pub fn new(data: T) -> ViewState<T> {
        ViewState {
            sequence: AtomicU64::new(0),
            inner: Mutex::new(Inner {
                data,
                loading: false,
                banner: None,
                pending_delete: None,
                committed: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn begin(&self) -> Ticket {
        let ticket = Ticket(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
        self.lock().loading = true;
        ticket
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.sequence.load(Ordering::SeqCst) == ticket.0
    }

    pub fn has_loaded(&self) -> bool {
        self.lock().committed.is_some()
    }

    /// Stores `data` if no newer refresh started in the meantime.
    pub fn commit(&self, ticket: Ticket, data: T) -> bool {
        self.finish(ticket, |inner| inner.data = data)
    }

    // Like `commit`, but lets the caller touch only part of the data.
    pub fn commit_with(&self, ticket: Ticket, apply: impl FnOnce(&mut T)) -> bool {
        self.finish(ticket, |inner| apply(&mut inner.data))
    }

    /// Stores `data` and shows `banner` together, or neither when stale.
    pub fn commit_announcing(&self, ticket: Ticket, data: T, banner: Banner) -> bool {
        self.finish(ticket, |inner| {
            inner.data = data;
            inner.banner = Some(banner);
        })
    }

    /// Records a failed refresh. Ignored when a newer refresh exists.
    pub fn fail(&self, ticket: Ticket, banner: Banner) -> bool {
        self.fail_with(ticket, banner, |_| {})
    }

    // Like `fail`, but also resets part of the data under the same lock.
    pub fn fail_with(&self, ticket: Ticket, banner: Banner, apply: impl FnOnce(&mut T)) -> bool {
        self.finish(ticket, |inner| {
            apply(&mut inner.data);
            inner.banner = Some(banner);
        })
    }

    fn finish(&self, ticket: Ticket, apply: impl FnOnce(&mut Inner<T>)) -> bool {
        let mut inner = self.lock();
        if !self.is_current(ticket) {
            tracing::info!(ticket = ticket.0, "Dropping stale refresh result");
            return false;
        }
        apply(&mut inner);
        inner.loading = false;
        inner.committed = Some(ticket);
        true
    }

    pub fn raise(&self, banner: Banner) {
        self.lock().banner = Some(banner);
    }

    pub fn dismiss_error(&self) {
        let mut inner = self.lock();
        if matches!(&inner.banner, Some(b) if b.kind == BannerKind::Error) {
            inner.banner = None;
        }
    }

    pub fn request_delete(&self, id: &str) {
        self.lock().pending_delete = Some(id.to_string());
    }

    pub fn cancel_delete(&self) {
        self.lock().pending_delete = None;
    }

    /// Clears the pending confirmation if it is for `id`.
    pub fn take_pending_delete(&self, id: &str) -> bool {
        let mut inner = self.lock();
        if inner.pending_delete.as_deref() == Some(id) {
            inner.pending_delete = None;
            true
        } else {
            false
        }
    }
}

impl<T: Clone> ViewState<T> {
    pub fn snapshot(&self, now: DateTime<Utc>) -> Snapshot<T> {
        let mut inner = self.lock();
        if matches!(&inner.banner, Some(banner) if !banner.visible_at(now)) {
            inner.banner = None;
        }
        Snapshot {
            data: inner.data.clone(),
            loading: inner.loading,
            banner: inner.banner.clone(),
            pending_delete: inner.pending_delete.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{Banner, ViewState};

    #[test]
    fn only_the_newest_refresh_commits() {
        let state: ViewState<Vec<u32>> = ViewState::default();

        let first = state.begin();
        let second = state.begin();

        assert!(state.commit(second, vec![2]));
        assert!(!state.commit(first, vec![1]));

        let snapshot = state.snapshot(Utc::now());
        assert_eq!(snapshot.data, vec![2]);
        assert!(!snapshot.loading);
    }

    #[test]
    fn loading_stays_on_until_the_newest_refresh_lands() {
        let state: ViewState<Vec<u32>> = ViewState::default();

        let first = state.begin();
        let second = state.begin();
        assert!(!state.commit(first, vec![1]));
        assert!(state.snapshot(Utc::now()).loading);

        state.commit(second, vec![2]);
        assert!(!state.snapshot(Utc::now()).loading);
    }

    #[test]
    fn stale_failures_do_not_raise_banners() {
        let state: ViewState<u8> = ViewState::default();
        let first = state.begin();
        let _second = state.begin();

        assert!(!state.fail(first, Banner::error("Failed to load order data".into())));
        assert_eq!(state.snapshot(Utc::now()).banner, None);
    }

    #[test]
    fn stale_results_leave_data_and_banner_alone() {
        let state: ViewState<Vec<u32>> = ViewState::default();
        let first = state.begin();
        let second = state.begin();

        assert!(state.commit(second, vec![2]));
        assert!(!state.fail_with(first, Banner::error("Failed to load customer data".into()), |data| {
            data.clear()
        }));
        assert!(!state.commit_announcing(first, vec![1], Banner::success("Welcome back".into())));

        let snapshot = state.snapshot(Utc::now());
        assert_eq!(snapshot.data, vec![2]);
        assert_eq!(snapshot.banner, None);
    }

    #[test]
    fn current_failure_resets_data_and_raises_banner() {
        let state: ViewState<Vec<u32>> = ViewState::new(vec![7]);
        let ticket = state.begin();

        assert!(state.fail_with(ticket, Banner::error("Failed to load query data".into()), |data| {
            data.clear()
        }));

        let snapshot = state.snapshot(Utc::now());
        assert!(snapshot.data.is_empty());
        assert_eq!(snapshot.banner.map(|b| b.text).as_deref(), Some("Failed to load query data"));
    }

    #[test]
    fn success_banner_expires_after_five_seconds() {
        let state: ViewState<u8> = ViewState::default();
        let banner = Banner::success("Order deleted successfully!".into());
        let shown_at = banner.shown_at;
        state.raise(banner);

        assert!(state.snapshot(shown_at + Duration::seconds(4)).banner.is_some());
        assert!(state.snapshot(shown_at + Duration::seconds(5)).banner.is_none());
    }

    #[test]
    fn error_banner_stays_until_dismissed() {
        let state: ViewState<u8> = ViewState::default();
        let banner = Banner::error("Failed to create order".into());
        let shown_at = banner.shown_at;
        state.raise(banner);

        assert!(state.snapshot(shown_at + Duration::minutes(10)).banner.is_some());
        state.dismiss_error();
        assert!(state.snapshot(shown_at).banner.is_none());
    }

    #[test]
    fn delete_needs_the_matching_confirmation() {
        let state: ViewState<u8> = ViewState::default();

        assert!(!state.take_pending_delete("abc"));
        state.request_delete("abc");
        assert!(!state.take_pending_delete("other"));
        assert!(state.take_pending_delete("abc"));
        assert!(!state.take_pending_delete("abc"));

        state.request_delete("abc");
        state.cancel_delete();
        assert!(!state.take_pending_delete("abc"));
    }
}
