use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::Page;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_auth;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    view! {
        <PageFrame page_id="configuracion--system" category=PAGE_CAT_SYSTEM title=Page::Settings.title()>
            <Show when=move || auth_state.get().is_admin()>
                <p class="section-title">"Herramientas de Administrador"</p>
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::Users)>
                        "Gestionar Usuarios"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::Documents)>
                        "Gestionar Documentos"
                    </Button>
                </Flex>
            </Show>

            <p class="section-title">"Opciones Generales"</p>
            <Flex gap=FlexGap::Small>
                <Button on_click=move |_| ctx.navigate(Page::ChangePassword)>
                    "Cambiar Contraseña"
                </Button>
            </Flex>
        </PageFrame>
    }
}
