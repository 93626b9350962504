use studyhall_web::App;

fn main() {
    dioxus::launch(App);
}
