use chat_client::app::ChatHost;
use chat_client::paste::PastedFile;
use chat_client::ClientEvent;
use chat_emoji::SearchRequest;

/// Host double that records every side effect requested by the app.
#[derive(Default)]
pub struct RecordingHost {
    pub events: Vec<ClientEvent>,
    pub searches: Vec<SearchRequest>,
    pub uploads: Vec<PastedFile>,
    pub renders: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_search(&mut self) -> SearchRequest {
        self.searches.pop().expect("a search was requested")
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.iter().map(ClientEvent::name).collect()
    }
}

impl ChatHost for RecordingHost {
    fn emit(&mut self, event: ClientEvent) {
        self.events.push(event);
    }

    fn search_emoji(&mut self, request: SearchRequest) {
        self.searches.push(request);
    }

    fn upload_image(&mut self, file: PastedFile) {
        self.uploads.push(file);
    }

    fn request_render(&mut self) {
        self.renders += 1;
    }
}
