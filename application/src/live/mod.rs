//! Live recipe browsing over a [WebSocket] connection.
//!
//! The client script reports DOM [`Event`]s, and a per-connection
//! [`Controller`] answers with [`Update`]s of the page markup.
//!
//! [WebSocket]: https://developer.mozilla.org/en-US/docs/Web/API/WebSockets_API

pub mod message;

use std::time::Duration;

use askama::Template as _;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        WebSocketUpgrade,
    },
    response::Response,
    Extension,
};
use service::{
    domain::Session,
    infra::source,
    query::recipes::Browse,
    read::recipe::{filter, Browser, Filter, SearchTerm},
    task::Debounce,
    Query as _,
};
use tracing::{self as log, Instrument as _};
use uuid::Uuid;

use crate::{render, AsError, CurrentSession, Error, Service};

pub use self::message::{Event, Target, Update};

/// Per-connection recipe browsing controller.
///
/// Owns the [`Browser`] state and the [`Debounce`] of the search input.
#[derive(Debug)]
pub struct Controller {
    /// Browsing state over the fetched recipes.
    browser: Browser,

    /// Pending search input.
    search: Debounce<String>,
}

impl Controller {
    /// Creates a new [`Controller`] over the provided [`Browser`].
    #[must_use]
    pub fn new(browser: Browser, search_debounce: Duration) -> Self {
        Self {
            browser,
            search: Debounce::new(search_debounce),
        }
    }

    /// Returns [`Update`]s revealing the freshly fetched recipes.
    ///
    /// # Errors
    ///
    /// If the markup fails to render.
    pub fn init(&self) -> Result<Vec<Update>, askama::Error> {
        let cuisines = render::Cuisines {
            catalog: self.browser.cuisines(),
        };
        let mut updates =
            vec![Update::html(Target::CuisineFilter, cuisines.render()?)];
        updates.extend(self.listing()?);
        updates.push(Update::display(Target::LoadingMessage, false));
        Ok(updates)
    }

    /// Returns [`Update`]s reporting the provided fetch [`Error`].
    #[must_use]
    pub fn failure(err: &Error) -> Vec<Update> {
        vec![
            Update::display(Target::LoadingMessage, false),
            Update::text(
                Target::ErrorMessage,
                format!("Error: {}. Please try again later.", err.message),
            ),
            Update::display(Target::ErrorMessage, true),
        ]
    }

    /// Handles the provided [`Event`], returning the [`Update`]s to push.
    ///
    /// Search input is only scheduled here, and applied once it is
    /// [`debounced`](Controller::debounced()). A cuisine change applies the
    /// pending search input right away.
    ///
    /// # Errors
    ///
    /// If the markup fails to render.
    pub fn handle(
        &mut self,
        event: Event,
    ) -> Result<Vec<Update>, askama::Error> {
        match event {
            Event::Search { term } => {
                _ = self.search.schedule(term);
                Ok(vec![])
            }
            Event::Cuisine { value } => {
                if let Some(term) = self.search.cancel() {
                    self.browser.apply(Filter {
                        search: SearchTerm::new(term),
                        cuisine: filter::cuisine(value),
                    });
                } else {
                    self.browser.set_cuisine(value);
                }
                self.listing()
            }
            Event::ShowMore => {
                self.browser.show_more();
                self.listing()
            }
            Event::View { id } => {
                let Some(recipe) = self.browser.recipe(id) else {
                    log::debug!("no `Recipe(id: {id})` to view");
                    return Ok(vec![]);
                };
                Ok(vec![
                    Update::text(Target::ModalTitle, &recipe.name),
                    Update::html(
                        Target::ModalBody,
                        render::Modal::new(recipe).render()?,
                    ),
                    Update::display(Target::RecipeModal, true),
                ])
            }
            Event::CloseModal => {
                Ok(vec![Update::display(Target::RecipeModal, false)])
            }
        }
    }

    /// Waits for the scheduled search input to settle.
    ///
    /// # Cancel safety
    ///
    /// This method is cancel safe.
    pub async fn debounced(&mut self) -> String {
        self.search.ready().await
    }

    /// Applies the provided search `term`, returning the [`Update`]s to push.
    ///
    /// # Errors
    ///
    /// If the markup fails to render.
    pub fn search(&mut self, term: &str) -> Result<Vec<Update>, askama::Error> {
        self.browser.set_search(term);
        self.listing()
    }

    /// Returns [`Update`]s of the currently revealed recipes.
    fn listing(&self) -> Result<Vec<Update>, askama::Error> {
        let page = self.browser.page();
        let has_more = page.has_more;
        Ok(vec![
            Update::html(
                Target::RecipesGrid,
                render::Grid::new(page.nodes).render()?,
            ),
            Update::text(Target::RecipeCount, self.browser.summary()),
            Update::display(Target::ShowMoreContainer, has_more),
        ])
    }
}

/// Upgrades the connection for the [`CurrentSession`].
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
pub async fn connect(
    Extension(service): Extension<Service>,
    CurrentSession(session): CurrentSession,
    ws: WebSocketUpgrade,
) -> Response {
    ws.max_message_size(4096)
        .on_upgrade(move |socket| serve(socket, service, session))
}

/// Step of a live connection.
#[derive(Debug)]
enum Step {
    /// Client sent a frame, or disconnected.
    Received(Option<Result<Message, axum::Error>>),

    /// Search input has settled.
    Debounced(String),
}

/// Serves a single live connection until the client disconnects.
async fn serve(mut socket: WebSocket, service: Service, session: Session) {
    let span = log::info_span!(
        "live connection",
        id = %Uuid::new_v4(),
        user = %session,
    );
    async move {
        log::debug!("connected");

        let browser = match service.execute(Browse).await {
            Ok(browser) => browser,
            Err(e) => {
                let err = e.into_error();
                log::warn!("{err}");
                _ = push(&mut socket, &Controller::failure(&err)).await;
                return;
            }
        };
        let mut controller =
            Controller::new(browser, service.config().search_debounce);
        if let Err(e) = reply(&mut socket, controller.init()).await {
            log::error!("{e}");
            return;
        }

        loop {
            let step = tokio::select! {
                msg = socket.recv() => Step::Received(msg),
                term = controller.debounced() => Step::Debounced(term),
            };
            let updates = match step {
                Step::Debounced(term) => controller.search(&term),
                Step::Received(Some(Ok(Message::Text(text)))) => {
                    match serde_json::from_str::<Event>(&text) {
                        Ok(event) => controller.handle(event),
                        Err(e) => {
                            log::warn!("malformed `Event`: {e}");
                            continue;
                        }
                    }
                }
                Step::Received(Some(Ok(
                    Message::Binary(_) | Message::Ping(_) | Message::Pong(_),
                ))) => continue,
                Step::Received(Some(Ok(Message::Close(_))) | None) => break,
                Step::Received(Some(Err(e))) => {
                    log::debug!("connection failed: {e}");
                    break;
                }
            };
            if let Err(e) = reply(&mut socket, updates).await {
                log::error!("{e}");
                break;
            }
        }

        log::debug!("disconnected");
    }
    .instrument(span)
    .await;
}

/// Pushes the rendered [`Update`]s, if any.
async fn reply(
    socket: &mut WebSocket,
    updates: Result<Vec<Update>, askama::Error>,
) -> Result<(), Error> {
    let updates = updates.map_err(AsError::into_error)?;
    push(socket, &updates).await
}

/// Pushes the provided [`Update`]s as a single frame, if any.
async fn push(socket: &mut WebSocket, updates: &[Update]) -> Result<(), Error> {
    if updates.is_empty() {
        return Ok(());
    }
    let frame = serde_json::to_string(updates)
        .map_err(|e| Error::internal(&e))?;
    socket
        .send(Message::Text(frame))
        .await
        .map_err(|e| Error::internal(&e))
}

impl AsError for source::Error {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error {
            code: "SOURCE_UNAVAILABLE",
            status_code: http::StatusCode::BAD_GATEWAY,
            message: self.status().map_or_else(
                || "Failed to fetch recipes.".to_owned(),
                |code| format!("Failed to fetch recipes. Status: {code}"),
            ),
            backtrace: None,
        })
    }
}
