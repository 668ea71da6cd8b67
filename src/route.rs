/// Which board, if any, the current page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/boards/<digits>`: fetch the board from the API.
    Board(u64),
    /// `/boards/sample`: the built-in sample board, no fetch.
    Sample,
}

impl Route {
    pub fn parse(path: &str) -> Option<Route> {
        let rest = path.strip_prefix("/boards/")?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest == "sample" {
            return Some(Route::Sample);
        }
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        rest.parse().ok().map(Route::Board)
    }

    pub fn current() -> Option<Route> {
        let path = web_sys::window()?.location().pathname().ok()?;
        Route::parse(&path)
    }
}

pub fn board_url(api_base: &str, id: u64) -> String {
    format!("{}/boards/{}", api_base, id)
}
