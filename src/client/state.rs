//! Module `client`
//!
//! Defines the `Page` destinations and the `Client` struct tracking which
//! page the front end is currently showing.

use std::fmt;

/// Logical destinations of the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Signup,
    Profile,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Login => "/login",
            Page::Signup => "/signup",
            Page::Profile => "/home",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Page::Landing),
            "/login" => Some(Page::Login),
            "/signup" => Some(Page::Signup),
            "/home" => Some(Page::Profile),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "Authentication System",
            Page::Login => "Welcome back",
            Page::Signup => "Create an account",
            Page::Profile => "Welcome!",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Page::Landing => {
                "A modern and sleek authentication system with login and signup functionality."
            }
            Page::Login => "Enter your credentials to access your account",
            Page::Signup => "Enter your details to get started",
            Page::Profile => "You have successfully logged in.",
        }
    }

    /// Whether the page needs a current session to be shown
    pub fn requires_session(&self) -> bool {
        matches!(self, Page::Profile)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Represents the state of the front end for one user at the keyboard.
pub struct Client {
    page: Page,
    visited: Vec<Page>,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            page: Page::Landing,
            visited: vec![Page::Landing],
        }
    }
}

impl Client {
    /// Returns the page currently shown.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Pages shown so far, oldest first.
    pub fn visited(&self) -> &[Page] {
        &self.visited
    }

    /// Moves to `page`. Callers apply the session guard first.
    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            self.visited.push(page);
        }
        self.page = page;
    }
}
