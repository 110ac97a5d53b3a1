#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bikeshare binary.
#[macro_export]
macro_rules! bikeshare {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bikeshare"))
    };
}

/// Chicago export with the optional Gender and Birth Year columns.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St & Adams St,Clinton St & Lake St,Subscriber,Male,1992.0
1,2017-01-02 09:15:00,2017-01-02 09:30:00,900,Canal St & Adams St,Clinton St & Lake St,Subscriber,Female,1985.0
2,2017-03-06 17:00:00,2017-03-06 17:10:00,600,Clinton St & Lake St,Canal St & Adams St,Customer,,
3,2017-03-07 17:30:00,2017-03-07 17:45:00,900,Streeter Dr & Grand Ave,Canal St & Adams St,Subscriber,Male,1992.0
4,2017-03-10 09:05:00,2017-03-10 09:25:00,1200,Streeter Dr & Grand Ave,Streeter Dr & Grand Ave,Customer,Female,1970.0
5,2017-06-05 08:00:00,2017-06-05 08:10:00,600,Canal St & Adams St,Clinton St & Lake St,Subscriber,Male,1988.0
";

/// Washington export without Gender and Birth Year.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-06 08:15:00,2017-03-06 08:25:00,600.5,Lincoln Memorial,Jefferson Dr & 14th St SW,Subscriber
1,2017-03-06 17:40:00,2017-03-06 17:45:00,300,Jefferson Dr & 14th St SW,Lincoln Memorial,Customer
2,2017-03-07 08:05:00,2017-03-07 08:20:00,900,Lincoln Memorial,Jefferson Dr & 14th St SW,Subscriber
";

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const VIEW_QUESTION: &str = "Would you like to view 5 rows of individual trip data?";
pub const RESTART_QUESTION: &str = "Would you like to restart?";

/// A temporary working directory holding city files and config.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Chicago and Washington files in the working directory; no New York file.
    pub fn with_cities() -> Self {
        let fixture = Self::new();
        fixture.create_file("chicago.csv", CHICAGO_CSV);
        fixture.create_file("washington.csv", WASHINGTON_CSV);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.bikeshare.toml` into the working directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".bikeshare.toml", content);
    }

    /// The binary running inside the fixture, isolated from the real user config.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = bikeshare!();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }
}
