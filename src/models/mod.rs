pub mod anagram_check;
