//! Login gate in front of the directory

use rollcall::{Directory, Session};

fn main() {
    println!("=== Login Flow ===\n");

    let session = Session::default();

    // Navigation watches the session and routes on the flag.
    session
        .watch(|state| {
            if state.authenticated {
                println!("-> navigate to /dashboard");
            } else {
                println!("-> navigate to /login");
            }
        })
        .forget();

    println!("\nTrying a bad password...");
    let ok = session.login("admin", "letmein");
    println!("login returned {ok}");

    println!("\nTrying the demo credentials (admin / admin)...");
    let ok = session.login("admin", "admin");
    println!("login returned {ok}");

    let directory = Directory::with_sample_data();
    println!(
        "\nDashboard shows {} employees to the signed-in user",
        directory.len()
    );
}
