//! Interactive shell
//!
//! Drives the pages from a line-based prompt.

use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::io::{self, BufRead, Write};

use crate::auth::{LoginForm, PasswordChecklist, ProfileRecord, SignupForm, ValidationPolicy};
use crate::client::{Client, Page};
use crate::middleware::logging::log_navigation;
use crate::protocol::responses::format_field_errors;
use crate::protocol::{
    Command, SubmitResult, handle_login, handle_logout, handle_profile, handle_signup,
    parse_command, resolve_route,
};
use crate::storage::{KeyValueStore, UserStore};

const HELP: &str = "Commands:
  home     show the landing page
  login    sign in with email and password
  signup   create an account
  profile  show your profile (requires login)
  logout   end the current session
  help     show this message
  quit     leave
";

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Line-oriented front end over a user store.
///
/// Reads commands and form fields from any `BufRead` and writes pages,
/// field errors and notifications to any `Write`.
pub struct App<S> {
    store: UserStore<S>,
    policy: ValidationPolicy,
    client: Client,
    clock: fn() -> NaiveDate,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: UserStore<S>, policy: ValidationPolicy) -> Self {
        Self {
            store,
            policy,
            client: Client::default(),
            clock: local_today,
        }
    }

    /// Replaces the source of "today" used by signup date checks.
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &UserStore<S> {
        &self.store
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn into_store(self) -> UserStore<S> {
        self.store
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        info!("Front end started on {}", self.client.page());
        self.render_page(output)?;

        loop {
            write!(output, "{}> ", self.client.page())?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            if line.trim().is_empty() {
                continue;
            }

            let command = parse_command(&line);
            debug!("Received command: {:?}", command);

            let keep_going = match command {
                Command::Home => {
                    self.go(Page::Landing, output)?;
                    true
                }
                Command::Login => self.login(input, output)?,
                Command::Signup => self.signup(input, output)?,
                Command::Profile => {
                    self.go(Page::Profile, output)?;
                    true
                }
                Command::Logout => {
                    let result = handle_logout(&mut self.store);
                    self.apply(result, output)?;
                    true
                }
                Command::Help => {
                    write!(output, "{}", HELP)?;
                    true
                }
                Command::Quit => false,
                Command::Unknown(text) => {
                    writeln!(output, "Unknown command: {}. Type 'help'.", text)?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        writeln!(output, "Goodbye")?;
        info!("Front end stopped");
        Ok(())
    }

    /// Navigates through the session guard and renders where it lands.
    fn go<W: Write>(&mut self, requested: Page, output: &mut W) -> io::Result<()> {
        let target = resolve_route(&self.store, requested);
        if target != requested {
            writeln!(output, "Please log in to view {}.", requested)?;
        }
        if target != self.client.page() {
            log_navigation(self.client.page(), target);
        }
        self.client.navigate(target);
        self.render_page(output)
    }

    fn render_page<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        let page = self.client.page();
        writeln!(output, "== {} ==", page.title())?;
        writeln!(output, "{}", page.subtitle())?;

        match page {
            Page::Landing => writeln!(output, "Sign in with 'login' or create an account with 'signup'."),
            Page::Profile => {
                let result = handle_profile(&mut self.store);
                match result.profile.clone() {
                    Some(profile) => render_profile(&profile, output),
                    None => self.apply(result, output),
                }
            }
            Page::Login | Page::Signup => Ok(()),
        }
    }

    fn login<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<bool> {
        self.go(Page::Login, output)?;

        let Some(email) = prompt(input, output, "Email")? else {
            return Ok(false);
        };
        let Some(password) = prompt(input, output, "Password")? else {
            return Ok(false);
        };

        let result = handle_login(&mut self.store, &LoginForm { email, password }, &self.policy);
        self.apply(result, output)?;
        Ok(true)
    }

    fn signup<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<bool> {
        self.go(Page::Signup, output)?;

        let mut values = Vec::with_capacity(8);
        for label in [
            "First Name",
            "Last Name",
            "Email",
            "Day (DD)",
            "Month (MM)",
            "Year (YYYY)",
            "Password",
        ] {
            let Some(value) = prompt(input, output, label)? else {
                return Ok(false);
            };
            values.push(value);
        }

        let min_length = self.policy.min_password_length;
        if let Some(password) = values.last() {
            write!(
                output,
                "{}",
                PasswordChecklist::evaluate(password, min_length).render(min_length)
            )?;
        }

        let Some(confirm_password) = prompt(input, output, "Confirm Password")? else {
            return Ok(false);
        };

        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();
        let form = SignupForm {
            first_name: next(),
            last_name: next(),
            email: next(),
            birth_day: next(),
            birth_month: next(),
            birth_year: next(),
            password: next(),
            confirm_password,
        };

        let result = handle_signup(&mut self.store, &form, &self.policy, (self.clock)());
        self.apply(result, output)?;
        Ok(true)
    }

    /// Prints a submission outcome and follows its redirect.
    fn apply<W: Write>(&mut self, result: SubmitResult, output: &mut W) -> io::Result<()> {
        if let Some(errors) = result.field_errors() {
            write!(output, "{}", format_field_errors(errors))?;
        }
        if let Some(notification) = &result.notification {
            writeln!(output, "{}", notification)?;
        }
        match result.redirect {
            Some(page) => {
                if page != self.client.page() {
                    log_navigation(self.client.page(), page);
                }
                self.client.navigate(page);
                self.render_page(output)
            }
            None => Ok(()),
        }
    }
}

/// Writes `label: `, reads one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}: ", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn render_profile<W: Write>(profile: &ProfileRecord, output: &mut W) -> io::Result<()> {
    writeln!(output, "Welcome, {}!", profile.first_name)?;
    writeln!(output, "  Name:          {}", profile.full_name())?;
    writeln!(output, "  Email:         {}", profile.email)?;
    writeln!(output, "  Date of birth: {}", profile.birth_date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::io::Cursor;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn run_script(script: &str) -> (App<MemoryStore>, String) {
        let store = UserStore::with_default_keys(MemoryStore::new());
        let mut app = App::new(store, ValidationPolicy::default()).with_clock(fixed_today);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        app.run(&mut input, &mut output).unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[test]
    fn shows_landing_and_quits() {
        let (app, output) = run_script("quit\n");
        assert!(output.contains("== Authentication System =="));
        assert!(output.ends_with("Goodbye\n"));
        assert_eq!(app.client().page(), Page::Landing);
    }

    #[test]
    fn profile_without_login_lands_on_login() {
        let (app, output) = run_script("profile\n");
        assert!(output.contains("Please log in to view /home."));
        assert_eq!(app.client().page(), Page::Login);
    }

    #[test]
    fn signup_prints_checklist_and_errors() {
        let (app, output) =
            run_script("signup\nJ\nLi\nbad\n31\n02\n2000\nabc\nabd\n");
        assert!(output.contains("[ ] At least 8 characters"));
        assert!(output.contains("First Name: First name must be at least 2 characters"));
        assert!(output.contains("Email: Please enter a valid email address"));
        assert!(output.contains("Day: Please enter a valid date"));
        assert!(output.contains("Confirm Password: Passwords don't match"));
        assert_eq!(app.client().page(), Page::Signup);
        assert!(app.store().load_database().unwrap().is_none());
    }

    #[test]
    fn unknown_command_hints_help() {
        let (_, output) = run_script("dance\nhelp\n");
        assert!(output.contains("Unknown command: dance. Type 'help'."));
        assert!(output.contains("Commands:"));
    }
}
