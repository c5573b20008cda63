//! Built-in rule catalog.
//!
//! Every rule is a plain function over the whole log text. Rules never look
//! at each other's results and all of them run on every evaluation; the
//! order of [`BUILTIN_RULES`] is the order of the resulting report.

use mcdiag_types::{Diagnostic, Severity};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

const RIGHT_JAVA_HELP: &str =
    "[See here for help installing the correct version.](https://github.com/MultiMC/MultiMC5/wiki/Using-the-right-Java)";

static ONEDRIVE_FOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Minecraft folder is:\nC:/.+/.+/OneDrive").unwrap());

// Old launchers print "1.8.0_292", newer ones "17.0.1"; the optional
// "1." is skipped lazily so two-digit majors are not split.
static JAVA_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Java is version (?:1\.)??(?P<major>[6-9]|[1-9][0-9])\..+,").unwrap()
});

static MAX_HEAP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-Xmx(?P<amount>[0-9]+)m[,\]]").unwrap());

/// Java major version every supported Minecraft release expects.
const EXPECTED_JAVA_MAJOR: u32 = 8;

/// Heap sizes above this many gigabytes cause GC lag spikes.
const RAM_WARNING_THRESHOLD_GB: f64 = 10.0;

/// Stable identifier of a built-in rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    ProgramFiles,
    ServerJava,
    IdRangeExceeded,
    OutOfMemory,
    ShadermodOptifine,
    FabricApiMissing,
    OneDrive,
    JavaVersion,
    PixelFormatWin10,
    JavaArchitecture,
    RamAllocation,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::ProgramFiles => "program-files",
            RuleId::ServerJava => "server-java",
            RuleId::IdRangeExceeded => "id-range-exceeded",
            RuleId::OutOfMemory => "out-of-memory",
            RuleId::ShadermodOptifine => "shadermod-optifine",
            RuleId::FabricApiMissing => "fabric-api-missing",
            RuleId::OneDrive => "onedrive",
            RuleId::JavaVersion => "java-version",
            RuleId::PixelFormatWin10 => "pixel-format-win10",
            RuleId::JavaArchitecture => "java-architecture",
            RuleId::RamAllocation => "ram-allocation",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named predicate-transform over log text.
#[derive(Clone, Copy)]
pub struct BuiltinRule {
    pub id: RuleId,
    pub severity: Severity,
    pub description: &'static str,
    check: fn(&str) -> Option<String>,
}

impl fmt::Debug for BuiltinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinRule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl BuiltinRule {
    /// Run the rule against `blob`, producing a diagnostic on match.
    pub fn check(&self, blob: &str) -> Option<Diagnostic> {
        (self.check)(blob).map(|message| Diagnostic::builtin(self.id.as_str(), self.severity, message))
    }
}

/// The catalog, in report order.
pub static BUILTIN_RULES: [BuiltinRule; 11] = [
    BuiltinRule {
        id: RuleId::ProgramFiles,
        severity: Severity::Critical,
        description: "MultiMC installed under C:/Program Files",
        check: program_files,
    },
    BuiltinRule {
        id: RuleId::ServerJava,
        severity: Severity::Critical,
        description: "Server variant of the Java VM",
        check: server_java,
    },
    BuiltinRule {
        id: RuleId::IdRangeExceeded,
        severity: Severity::Critical,
        description: "Block/item id limit exceeded",
        check: id_range_exceeded,
    },
    BuiltinRule {
        id: RuleId::OutOfMemory,
        severity: Severity::Critical,
        description: "java.lang.OutOfMemoryError",
        check: out_of_memory,
    },
    BuiltinRule {
        id: RuleId::ShadermodOptifine,
        severity: Severity::Critical,
        description: "Shaders Mod installed alongside OptiFine",
        check: shadermod_optifine,
    },
    BuiltinRule {
        id: RuleId::FabricApiMissing,
        severity: Severity::Critical,
        description: "A mod requires Fabric API, which is not installed",
        check: fabric_api_missing,
    },
    BuiltinRule {
        id: RuleId::OneDrive,
        severity: Severity::Warning,
        description: "MultiMC folder managed by OneDrive",
        check: onedrive_folder,
    },
    BuiltinRule {
        id: RuleId::JavaVersion,
        severity: Severity::Warning,
        description: "Java major version other than 8",
        check: java_version,
    },
    BuiltinRule {
        id: RuleId::PixelFormatWin10,
        severity: Severity::Warning,
        description: "Unsupported Intel GPU on Windows 10",
        check: pixel_format_win10,
    },
    BuiltinRule {
        id: RuleId::JavaArchitecture,
        severity: Severity::Warning,
        description: "32-bit Java on a 64-bit system",
        check: java_architecture,
    },
    BuiltinRule {
        id: RuleId::RamAllocation,
        severity: Severity::Notice,
        description: "More than 10 GB allocated to the JVM heap",
        check: ram_allocation,
    },
];

pub fn builtin_rules() -> &'static [BuiltinRule] {
    &BUILTIN_RULES
}

fn contains_all(blob: &str, needles: &[&str]) -> bool {
    needles.iter().all(|needle| blob.contains(needle))
}

fn program_files(blob: &str) -> Option<String> {
    blob.contains("Minecraft folder is:\nC:/Program Files").then(|| {
        "‼ Your MultiMC installation is in Program Files, where MultiMC doesn't have permission to write.\nYou should move it somewhere else, like your Desktop.".to_string()
    })
}

fn server_java(blob: &str) -> Option<String> {
    blob.contains("-Bit Server VM warning")
        .then(|| format!("‼ You're using the server version of Java. {}", RIGHT_JAVA_HELP))
}

fn id_range_exceeded(blob: &str) -> Option<String> {
    blob.contains("java.lang.RuntimeException: Invalid id 4096 - maximum id range exceeded.")
        .then(|| {
            "‼ You've exceeded the hardcoded ID Limit. Remove some mods, or install [this one](https://www.curseforge.com/minecraft/mc-mods/notenoughids)".to_string()
        })
}

fn out_of_memory(blob: &str) -> Option<String> {
    blob.contains("java.lang.OutOfMemoryError").then(|| {
        "‼ You've run out of memory. You should allocate more, although the exact value depends on how many mods you have installed.".to_string()
    })
}

fn shadermod_optifine(blob: &str) -> Option<String> {
    blob.contains("java.lang.RuntimeException: Shaders Mod detected. Please remove it, OptiFine has built-in support for shaders.")
        .then(|| {
            "‼ You've installed Shaders Mod alongside OptiFine. OptiFine has built-in shader support, so you should remove Shaders Mod".to_string()
        })
}

fn fabric_api_missing(blob: &str) -> Option<String> {
    contains_all(
        blob,
        &[
            "net.fabricmc.loader.discovery.ModResolutionException: Could not find required mod:",
            "requires {fabric @",
        ],
    )
    .then(|| {
        "‼ You are missing Fabric API, which is required by a mod.\n[Download the needed version here](https://www.curseforge.com/minecraft/mc-mods/fabric-api)".to_string()
    })
}

fn onedrive_folder(blob: &str) -> Option<String> {
    ONEDRIVE_FOLDER_REGEX.is_match(blob).then(|| {
        "❗ MultiMC is located in a folder managed by OneDrive. OneDrive messes with Minecraft folders while the game is running, and this often leads to crashes.\nYou should move the MultiMC folder to a different folder.".to_string()
    })
}

fn java_version(blob: &str) -> Option<String> {
    let major = detect_java_major(blob)?;
    if major == EXPECTED_JAVA_MAJOR {
        return None;
    }

    Some(format!(
        "❗ You're using Java {}. Versions other than Java 8 are not designed to be used with Minecraft and may cause issues. {}",
        major, RIGHT_JAVA_HELP
    ))
}

/// Major Java version from the first `Java is version ...` line.
///
/// `1.8.0_292` and `8.0.292` both yield 8.
pub fn detect_java_major(blob: &str) -> Option<u32> {
    let captures = JAVA_VERSION_REGEX.captures(blob)?;
    captures.name("major")?.as_str().parse().ok()
}

fn pixel_format_win10(blob: &str) -> Option<String> {
    contains_all(
        blob,
        &[
            "org.lwjgl.LWJGLException: Pixel format not accelerated",
            "Operating System: Windows 10",
        ],
    )
    .then(|| {
        "❗ You seem to be using an Intel GPU that is not supported on Windows 10.\nYou will need to install an older version of Java, [see here for help](https://github.com/MultiMC/MultiMC5/wiki/Unsupported-Intel-GPUs)".to_string()
    })
}

fn java_architecture(blob: &str) -> Option<String> {
    blob.contains("Your Java architecture is not matching your system architecture.")
        .then(|| format!("❗ You're using 32-bit Java. {}", RIGHT_JAVA_HELP))
}

fn ram_allocation(blob: &str) -> Option<String> {
    let gigabytes = detect_max_heap_gb(blob)?;
    if gigabytes <= RAM_WARNING_THRESHOLD_GB {
        return None;
    }

    Some(format!(
        "⚠ You have allocated {}GB of RAM to Minecraft. [This is too much and can cause lagspikes.](https://vazkii.net/#blog/ram-explanation)",
        format_gigabytes(gigabytes)
    ))
}

/// Maximum heap from the first `-Xmx<N>m` launch flag, in decimal gigabytes.
///
/// Any digit run is accepted; only amounts beyond the `f64` range yield `None`.
pub fn detect_max_heap_gb(blob: &str) -> Option<f64> {
    let captures = MAX_HEAP_REGEX.captures(blob)?;
    let megabytes: f64 = captures.name("amount")?.as_str().parse().ok()?;
    Some(megabytes / 1000.0).filter(|gigabytes| gigabytes.is_finite())
}

/// Values at or above this are written in exponent form (`1.6e+16`).
const EXPONENT_FORM_FROM: f64 = 1e16;

/// Shortest round-trip form with a fractional part (`12.0`, `10.5`),
/// switching to a signed two-digit exponent for very large values.
fn format_gigabytes(value: f64) -> String {
    if value.abs() >= EXPONENT_FORM_FROM {
        let formatted = format!("{:e}", value);
        if let Some((mantissa, exponent)) = formatted.split_once('e')
            && let Ok(exponent) = exponent.parse::<i32>()
        {
            let sign = if exponent < 0 { '-' } else { '+' };
            return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
        }
        return formatted;
    }

    let formatted = value.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}
