
use holocron_test_utils::prelude::*;

use super::*;
