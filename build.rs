use std::process::Command;

const CONFIG_VARS: [&str; 4] = [
    "OAUTH_LAB_API_BASE_URL",
    "OAUTH_LAB_REALM_URL",
    "OAUTH_LAB_CLIENT_ID",
    "OAUTH_LAB_POST_LOGOUT_REDIRECT_URI",
];

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let mut sha = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
    if git(&["status", "--porcelain", "--untracked-files=no"]).is_some() {
        sha.push_str("-dirty");
    }

    println!("cargo:rustc-env=OAUTH_LAB_WEB_GIT_SHA={sha}");
}
