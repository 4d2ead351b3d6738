use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::Error;

/// Portal server on the Qingshuihe campus education network.
pub const PORTAL_SERVER_IP_QSH: Ipv4Addr = Ipv4Addr::new(10, 253, 0, 237);
/// Portal server for the Qingshuihe dormitory network (telecom line).
pub const PORTAL_SERVER_IP_QSH_DORM: Ipv4Addr = Ipv4Addr::new(10, 253, 0, 235);
/// Portal server on the Shahe campus education network.
pub const PORTAL_SERVER_IP_SH: Ipv4Addr = Ipv4Addr::new(10, 254, 7, 4);

/// Portal variant to log in against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginType {
    QshEdu,
    QshDormDX,
    ShEdu,
}

impl LoginType {
    pub const ALL: [LoginType; 3] = [LoginType::QshEdu, LoginType::QshDormDX, LoginType::ShEdu];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoginType::QshEdu => "qsh-edu",
            LoginType::QshDormDX => "qsh-dorm-dx",
            LoginType::ShEdu => "sh-edu",
        }
    }

    pub fn server_ip(&self) -> Ipv4Addr {
        select_server_ip(*self)
    }
}

/// Map a login type to the portal server that handles it
pub fn select_server_ip(login_type: LoginType) -> Ipv4Addr {
    match login_type {
        LoginType::QshEdu => PORTAL_SERVER_IP_QSH,
        LoginType::QshDormDX => PORTAL_SERVER_IP_QSH_DORM,
        LoginType::ShEdu => PORTAL_SERVER_IP_SH,
    }
}

impl fmt::Display for LoginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginType {
    type Err = Error;

    // Accepts the wire names and the variant names, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qsh-edu" | "qshedu" => Ok(LoginType::QshEdu),
            "qsh-dorm-dx" | "qshdormdx" => Ok(LoginType::QshDormDX),
            "sh-edu" | "shedu" => Ok(LoginType::ShEdu),
            _ => Err(Error::UnknownLoginType(s.to_string())),
        }
    }
}
