use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

pub const PASSWORD_ENV: &str = "FIRESCRYPT_PASSWORD";

/// Reads the password to hash or verify.
///
/// An empty password is valid for the scheme, so only a missing one is an error.
pub fn read_password() -> Result<Zeroizing<String>> {
    //  Environment Variable
    //  FIRESCRYPT_PASSWORD="hunter2" firescrypt hash --salt c2FsdA==
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        return Ok(Zeroizing::new(pw));
    }

    //  stdin (Pipeline)
    //  printf "%s\n" "$PW" | firescrypt verify --salt c2FsdA== --hash tyWV
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            bail!("No password provided");
        }
        trim_newline(&mut buf);
        return Ok(buf);
    }

    //  Interactive (TTY)
    let pw = rpassword::prompt_password("Password: ")?;
    Ok(Zeroizing::new(pw))
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
