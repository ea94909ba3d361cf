//! Shared test utilities used across netlab crates.

pub mod tracing {
    //! Capture spans and events emitted while a closure runs.
    use std::{
        collections::HashMap,
        fmt,
        sync::{Arc, Mutex, MutexGuard, PoisonError},
    };

    use tracing::{
        Event, Level, Subscriber,
        field::{Field, Visit},
        span::{Attributes, Id, Record},
    };
    use tracing_subscriber::{
        Layer,
        layer::{Context, SubscriberExt},
        registry::LookupSpan,
    };

    /// Layer that stores every opened span and emitted event.
    ///
    /// Clones share the same storage, so a test keeps one handle and installs
    /// the other.
    ///
    /// # Examples
    /// ```
    /// use netlab_test_support::tracing::CaptureLayer;
    ///
    /// let ((), capture) = CaptureLayer::capture(|| tracing::warn!(nodes = 1, "too small"));
    /// assert!(capture.has_event(tracing::Level::WARN, "too small"));
    /// assert_eq!(capture.events()[0].field("nodes"), Some("1"));
    /// ```
    #[derive(Clone, Debug, Default)]
    pub struct CaptureLayer {
        records: Arc<Mutex<Records>>,
    }

    #[derive(Debug, Default)]
    struct Records {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    struct SpanSlot(usize);

    /// A span with every field recorded while it was open.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the callsite metadata.
        pub name: String,
        /// Fields supplied at creation or recorded later.
        pub fields: HashMap<String, String>,
    }

    /// An emitted event.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Name of the innermost span the event was emitted in, if any.
        pub span: Option<String>,
        /// Structured fields, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the rendered value of `name`.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }

        /// Returns the event message.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }
    }

    impl CaptureLayer {
        /// Runs `f` under a subscriber that only carries a fresh capture layer.
        pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Self) {
            let layer = Self::default();
            let subscriber = tracing_subscriber::registry().with(layer.clone());
            let value = tracing::subscriber::with_default(subscriber, f);
            (value, layer)
        }

        fn lock(&self) -> MutexGuard<'_, Records> {
            self.records.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Returns the spans opened so far, in creation order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.lock().spans.clone()
        }

        /// Returns the events emitted so far, in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.lock().events.clone()
        }

        /// Returns the first span called `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<SpanRecord> {
            self.lock().spans.iter().find(|span| span.name == name).cloned()
        }

        /// Returns whether an event at `level` carried `message`.
        #[must_use]
        pub fn has_event(&self, level: Level, message: &str) -> bool {
            self.lock()
                .events
                .iter()
                .any(|event| event.level == level && event.message() == Some(message))
        }

        /// Counts the events emitted at `level`.
        #[must_use]
        pub fn count_at(&self, level: Level) -> usize {
            self.lock()
                .events
                .iter()
                .filter(|event| event.level == level)
                .count()
        }
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            attrs.record(&mut FieldWriter(&mut fields));
            let slot = {
                let mut records = self.lock();
                records.spans.push(SpanRecord {
                    name: attrs.metadata().name().to_owned(),
                    fields,
                });
                records.spans.len() - 1
            };
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(SpanSlot(slot));
            }
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let Some(&SpanSlot(slot)) = span.extensions().get::<SpanSlot>() else {
                return;
            };
            if let Some(record) = self.lock().spans.get_mut(slot) {
                values.record(&mut FieldWriter(&mut record.fields));
            }
        }

        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldWriter(&mut fields));
            let span = ctx.event_span(event).map(|span| span.name().to_owned());
            self.lock().events.push(EventRecord {
                level: *event.metadata().level(),
                span,
                fields,
            });
        }
    }

    struct FieldWriter<'a>(&'a mut HashMap<String, String>);

    impl Visit for FieldWriter<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }
    }

}
